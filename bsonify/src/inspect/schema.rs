use crate::common::{OPTION_OMIT_EMPTY, TAG_OPTION_SEPARATOR, TAG_SKIP};
use smallvec::SmallVec;

/// A parsed field tag of the form `name[,option...]`.
///
/// The tag grammar follows the `bson` struct tag convention:
///
/// * `"-"` exactly: the field is never visited ([FieldTag::parse] returns `None`);
/// * `"name"`: the field is renamed;
/// * `"name,omitempty"`: renamed, and skipped while it holds its zero value;
/// * `",omitempty"`: keeps the declared name, skipped while zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag<'a> {
    name: &'a str,
    options: SmallVec<[&'a str; 4]>,
}

impl<'a> FieldTag<'a> {
    /// Parses a tag. Returns `None` for the skip sentinel `"-"`.
    pub fn parse(tag: &'a str) -> Option<FieldTag<'a>> {
        if tag == TAG_SKIP {
            return None;
        }

        let mut parts = tag.split(TAG_OPTION_SEPARATOR);
        let name = parts.next().unwrap_or_default();
        Some(FieldTag {
            name,
            options: parts.collect(),
        })
    }

    /// The override name, empty when the tag only carries options.
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn options(&self) -> &[&'a str] {
        &self.options
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| *o == option)
    }
}

/// Declared name and raw tag of one record field, as emitted by the derive
/// macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    declared: &'static str,
    tag: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(declared: &'static str, tag: Option<&'static str>) -> Self {
        FieldSpec { declared, tag }
    }
}

/// Naming and omission policy of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    declared: &'static str,
    name: &'static str,
    omit_empty: bool,
    skip: bool,
}

impl FieldDescriptor {
    /// Resolves the descriptor of a field from its declared name and tag.
    pub fn from_spec(spec: &FieldSpec) -> Self {
        let Some(tag) = spec.tag else {
            return FieldDescriptor {
                declared: spec.declared,
                name: spec.declared,
                omit_empty: false,
                skip: false,
            };
        };

        match FieldTag::parse(tag) {
            None => FieldDescriptor {
                declared: spec.declared,
                name: spec.declared,
                omit_empty: false,
                skip: true,
            },
            Some(parsed) => FieldDescriptor {
                declared: spec.declared,
                name: if parsed.name().is_empty() { spec.declared } else { parsed.name() },
                omit_empty: parsed.has_option(OPTION_OMIT_EMPTY),
                skip: false,
            },
        }
    }

    /// The field name as declared in source.
    pub fn declared(&self) -> &'static str {
        self.declared
    }

    /// The name the field is emitted under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn omit_empty(&self) -> bool {
        self.omit_empty
    }

    pub fn skip(&self) -> bool {
        self.skip
    }
}

/// The field table of a record type.
///
/// Built once per type and cached by the type itself; the derive macro keeps
/// it in a `static LazyLock` inside the generated `Record::schema`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    pub fn new(type_name: &'static str, fields: &[FieldSpec]) -> Self {
        let fields: Vec<FieldDescriptor> = fields.iter().map(FieldDescriptor::from_spec).collect();
        log::debug!("Built field schema for {} with {} fields", type_name, fields.len());
        RecordSchema { type_name, fields }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Every declared field, skipped ones included, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
