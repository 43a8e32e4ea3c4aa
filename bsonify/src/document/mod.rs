mod document;

pub use document::*;

/// Creates a [Document] with JSON-like syntax.
///
/// Keys are identifiers or string literals (use a string literal for dotted
/// keys). Values are literals, nested `{ ... }` documents, `[ ... ]` arrays,
/// or any parenthesized expression convertible into a
/// [Value](crate::common::Value). Entries are appended in the order written,
/// so repeated keys are kept.
///
/// # Examples
///
/// ```rust
/// use bsonify::doc;
/// use bsonify::common::Value;
///
/// let empty = doc!{};
/// assert!(empty.is_empty());
///
/// let base = 100;
/// let update = doc!{
///     "user.name": "Charlie",
///     "user.score": (base * 2),
///     tags: ["admin", "user"],
///     deleted_at: (Value::unset::<Option<u64>>()),
/// };
/// assert_eq!(update.len(), 4);
/// ```
#[macro_export]
macro_rules! doc {
    // match an empty document (with braces)
    ({}) => {
        $crate::document::Document::new()
    };

    // match an empty document
    () => {
        $crate::document::Document::new()
    };

    // match a document with key value pairs (with outer braces)
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    // match a document with key value pairs
    ($($key:tt : $value:tt),* $(,)?) => {
        {
            let mut doc = $crate::document::Document::new();
            $(
                doc.push($crate::document::normalize(stringify!($key)), $crate::doc_value!($value));
            )*
            doc
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! doc_value {
    // match a nested document
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
    };

    // match an array of values
    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    // match an expression (variable, function call, arithmetic in parens, literals, etc.)
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
