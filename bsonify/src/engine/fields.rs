use crate::errors::{BsonError, BsonResult, ErrorKind};
use crate::inspect::{Inspect, Kind, Record};

/// A named child of a composite value.
pub(crate) struct Child<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: &'a dyn Inspect,
}

/// Lists the children of a classified value in visiting order.
///
/// Records yield their fields in declaration order, applying the naming and
/// omission policy of their schema. Associative values yield their entries
/// in iteration order; the first key that is not a string aborts the whole
/// enumeration. Any other kind has no children.
pub(crate) fn children(kind: Kind<'_>) -> BsonResult<Vec<Child<'_>>> {
    match kind {
        Kind::Record(record) => record_fields(record),
        Kind::Associative(entries) => {
            let mut children = Vec::with_capacity(entries.size_hint().0);
            for (key, value) in entries {
                match key.as_key() {
                    Some(name) => children.push(Child { name, value }),
                    None => {
                        log::error!("Map key type should be string, found {}", key.type_name());
                        return Err(BsonError::invalid_key_type(key.type_name()));
                    }
                }
            }
            Ok(children)
        }
        _ => Ok(Vec::new()),
    }
}

fn record_fields(record: &dyn Record) -> BsonResult<Vec<Child<'_>>> {
    let schema = record.schema();
    let mut children = Vec::with_capacity(schema.len());
    for (index, descriptor) in schema.fields().iter().enumerate() {
        if descriptor.skip() {
            continue;
        }

        let Some(value) = record.field(index) else {
            log::error!("Record {} has no field at index {}", schema.type_name(), index);
            return Err(BsonError::new(
                &format!("field {} of {} is not accessible", descriptor.declared(), schema.type_name()),
                ErrorKind::InternalError,
            ));
        };

        if descriptor.omit_empty() && value.is_zero() {
            log::trace!("Omitting empty field {}.{}", schema.type_name(), descriptor.declared());
            continue;
        }

        children.push(Child {
            name: descriptor.name(),
            value,
        });
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{FieldSpec, RecordSchema};
    use std::collections::{BTreeMap, HashMap};
    use std::sync::LazyLock;

    struct Sample {
        aa: String,
        ab: bool,
        ac: String,
        secret: i32,
        ad: u32,
    }

    impl Record for Sample {
        fn schema(&self) -> &'static RecordSchema {
            static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
                RecordSchema::new(
                    "Sample",
                    &[
                        FieldSpec::new("aa", Some("aa,omitempty")),
                        FieldSpec::new("ab", Some("custom_name,omitempty")),
                        FieldSpec::new("ac", None),
                        FieldSpec::new("secret", Some("-")),
                        FieldSpec::new("ad", Some(",omitempty")),
                    ],
                )
            });
            &SCHEMA
        }

        fn field(&self, index: usize) -> Option<&dyn Inspect> {
            match index {
                0 => Some(&self.aa),
                1 => Some(&self.ab),
                2 => Some(&self.ac),
                3 => Some(&self.secret),
                4 => Some(&self.ad),
                _ => None,
            }
        }
    }

    fn names(children: &[Child<'_>]) -> Vec<String> {
        children.iter().map(|c| c.name.to_string()).collect()
    }

    #[test]
    fn test_record_naming_and_omission() {
        let sample = Sample {
            aa: String::new(),
            ab: true,
            ac: String::new(),
            secret: 42,
            ad: 0,
        };
        let children = children(Kind::Record(&sample)).unwrap();
        assert_eq!(names(&children), vec!["custom_name", "ac"]);
    }

    #[test]
    fn test_record_non_zero_values_are_kept() {
        let sample = Sample {
            aa: "x".to_string(),
            ab: false,
            ac: "y".to_string(),
            secret: 0,
            ad: 3,
        };
        let children = children(Kind::Record(&sample)).unwrap();
        assert_eq!(names(&children), vec!["aa", "ac", "ad"]);
    }

    #[test]
    fn test_associative_entries() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), 2);
        map.insert("a".to_string(), 1);
        let children = children(map.kind()).unwrap();
        assert_eq!(names(&children), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_associative_has_no_children() {
        let map: HashMap<String, i32> = HashMap::new();
        assert!(children(map.kind()).unwrap().is_empty());
    }

    #[test]
    fn test_non_string_key_is_rejected() {
        let mut wrapped = HashMap::new();
        wrapped.insert(1u8, "x");
        let err = children(wrapped.kind()).err().unwrap();
        assert_eq!(err.kind(), &ErrorKind::InvalidKeyType("u8".to_string()));
    }

    #[test]
    fn test_leaf_has_no_children() {
        assert!(children(5i32.kind()).unwrap().is_empty());
    }
}
