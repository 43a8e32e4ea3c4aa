use crate::common::Value;
use crate::document::Document;
use crate::inspect::{Inspect, Kind};

// Lets values whose shape is only known at runtime (documents decoded from
// configuration, hand-built update fragments) go through the same engine as
// derived records.

impl Inspect for Document {
    fn kind(&self) -> Kind<'_> {
        Kind::Associative(Box::new(
            self.iter().map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect)),
        ))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Inspect for Value {
    fn kind(&self) -> Kind<'_> {
        match self {
            Value::Null | Value::Unset(_) => Kind::Indirection(None),
            Value::Document(doc) => doc.kind(),
            Value::Array(values) => Kind::Sequence(Box::new(values.iter().map(|v| v as &dyn Inspect))),
            scalar => Kind::Scalar(scalar.clone()),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Value::Null | Value::Unset(_) => true,
            Value::Bool(v) => !*v,
            Value::Char(v) => *v == '\0',
            Value::String(v) => v.is_empty(),
            Value::Bytes(v) => v.is_empty(),
            Value::Array(v) => v.is_empty(),
            Value::Document(v) => v.is_empty(),
            Value::F32(v) => v.to_bits() == 0,
            Value::F64(v) => v.to_bits() == 0,
            number => number.as_integer() == Some(0),
        }
    }

    fn as_key(&self) -> Option<&str> {
        self.as_string()
    }

    // null stays null and an unset value keeps the type it was recorded with
    fn unset(&self) -> Value {
        self.clone()
    }
}
