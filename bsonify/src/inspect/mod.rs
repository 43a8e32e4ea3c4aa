//! Value classification used by the traversal engine.
//!
//! Every input type implements [Inspect], which classifies a value once into
//! a closed [Kind]. Record types additionally implement [Record], exposing a
//! cached [RecordSchema] and positional access to their fields. Both traits
//! are normally implemented with `#[derive(Inspect)]` from `bsonify_derive`.

mod collections;
mod dynamic;
mod pointers;
mod primitives;
mod schema;

pub use schema::*;

use crate::common::Value;

/// Iterator over the `(key, value)` pairs of an associative value.
pub type Entries<'a> = Box<dyn Iterator<Item = (&'a dyn Inspect, &'a dyn Inspect)> + 'a>;

/// Iterator over the elements of a sequence.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Inspect> + 'a>;

/// The shape of a value, as seen by the traversal engine.
pub enum Kind<'a> {
    /// An optional or union value. `None` when unset.
    Indirection(Option<&'a dyn Inspect>),
    /// A map-like value with keys and values. Keys must be strings, which is
    /// checked while the entries are enumerated.
    Associative(Entries<'a>),
    /// A value with named fields described by a [RecordSchema].
    Record(&'a dyn Record),
    /// A leaf holding an ordered list of values, rendered as an array.
    Sequence(Elements<'a>),
    /// A leaf value.
    Scalar(Value),
}

impl Kind<'_> {
    /// Returns `true` for records and associative values, the kinds the
    /// engine descends into.
    pub fn is_composite(&self) -> bool {
        matches!(self, Kind::Associative(_) | Kind::Record(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Indirection(Some(_)) => "indirection",
            Kind::Indirection(None) => "unset indirection",
            Kind::Associative(_) => "associative",
            Kind::Record(_) => "record",
            Kind::Sequence(_) => "sequence",
            Kind::Scalar(_) => "scalar",
        }
    }
}

/// A value the traversal engine can walk.
///
/// Smart pointers (`Box`, `Rc`, `Arc`, references) can never be unset, so
/// they report the kind of their target directly. `Option` and union enums
/// report [Kind::Indirection].
pub trait Inspect {
    /// Classifies this value.
    fn kind(&self) -> Kind<'_>;

    /// Returns `true` if this is the zero or empty value of its type. Fields
    /// tagged `omitempty` are skipped when this returns `true`.
    fn is_zero(&self) -> bool;

    /// The type name used in diagnostics and in [Value::Unset].
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The string this value stands for when used as a map key, if any.
    fn as_key(&self) -> Option<&str> {
        None
    }

    /// The value emitted when this value is an unset indirection.
    fn unset(&self) -> Value {
        Value::Unset(self.type_name())
    }
}

/// A value with named fields.
pub trait Record {
    /// The field table of this record type, in declaration order.
    fn schema(&self) -> &'static RecordSchema;

    /// The value of the field at `index` in [Record::schema].
    fn field(&self, index: usize) -> Option<&dyn Inspect>;

    /// Returns `true` if every field holds its zero value.
    fn all_fields_zero(&self) -> bool {
        (0..self.schema().len()).all(|index| self.field(index).map_or(true, |f| f.is_zero()))
    }
}
