use crate::common::{json_quote, Value};
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt::{Debug, Display};

/// Unordered key to value view of a flat document, as sent in a `$set`
/// update. Keys are unique; see [Document::into_update_map].
pub type UpdateMap = HashMap<String, Value>;

/// An ordered sequence of key-value entries.
///
/// Entries keep their insertion order and duplicate keys are allowed: the
/// traversal engine appends one entry per visited field, in field order, and
/// never deduplicates. Nested documents are stored as [Value::Document].
///
/// # Examples
///
/// ```rust
/// use bsonify::doc;
/// use bsonify::common::Value;
///
/// let doc = doc!{
///     name: "Alice",
///     address: {
///         city: "New York",
///     },
/// };
/// assert_eq!(doc.get("name"), Some(&Value::from("Alice")));
/// assert_eq!(doc.flatten(".").get("address.city"), Some(&Value::from("New York")));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<(String, Value)>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document { entries: Vec::new() }
    }

    /// Creates a new empty document with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Document {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of top-level entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends an entry at the end of the document. An existing entry with
    /// the same key is kept.
    pub fn push<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.entries.push((key.into(), value.into()));
    }

    /// Returns the value of the first entry with the given key.
    ///
    /// The key is matched against top-level entries only; a key containing
    /// a separator is looked up as-is, which is how flat update documents
    /// are queried.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the values of every entry with the given key, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Converts the document into an [UpdateMap].
    ///
    /// When several entries share a key the later one wins. Each overwrite
    /// drops data silently as far as the caller is concerned, so it is
    /// reported through `log::warn!`.
    pub fn into_update_map(self) -> UpdateMap {
        let mut map = UpdateMap::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            if let Some(previous) = map.insert(key, value) {
                log::warn!("Duplicate key in update document, discarding earlier value {:?}", previous);
            }
        }
        map
    }

    /// Returns a single-level copy of this document where every nested
    /// document is replaced by its entries, keyed by the parent keys joined
    /// with `separator`.
    ///
    /// Empty nested documents contribute no entries.
    pub fn flatten(&self, separator: &str) -> Document {
        let mut flat = Document::with_capacity(self.entries.len());
        flatten_into(&mut flat, &mut Vec::new(), self, separator);
        flat
    }

    pub(crate) fn to_pretty_json(&self, indent: usize) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }

        let indent_str = " ".repeat(indent + 2);
        let body = self
            .entries
            .iter()
            .map(|(key, value)| format!("{}{}: {}", indent_str, json_quote(key), value.to_pretty_json(indent + 2)))
            .join(",\n");
        format!("{{\n{}\n{}}}", body, " ".repeat(indent))
    }

    pub(crate) fn to_debug_string(&self, indent: usize) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }

        let indent_str = " ".repeat(indent + 2);
        let body = self
            .entries
            .iter()
            .map(|(key, value)| format!("{}\"{}\": {}", indent_str, key, value.to_debug_string(indent + 2)))
            .join(",\n");
        format!("{{\n{}\n{}}}", body, " ".repeat(indent))
    }
}

fn flatten_into<'a>(flat: &mut Document, path: &mut Vec<&'a str>, doc: &'a Document, separator: &str) {
    for (key, value) in doc.iter() {
        path.push(key);
        match value {
            Value::Document(nested) => flatten_into(flat, path, nested, separator),
            other => flat.push(path.iter().join(separator), other.clone()),
        }
        path.pop();
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_debug_string(0))
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_pretty_json(0))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        doc.extend(iter);
        doc
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Document {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Document {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}
