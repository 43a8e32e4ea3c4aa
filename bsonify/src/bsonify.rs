use crate::bsonify_builder::BsonifyBuilder;
use crate::bsonify_config::BsonifyConfig;
use crate::document::{Document, UpdateMap};
use crate::engine;
use crate::errors::{BsonError, BsonResult};
use crate::inspect::{Inspect, Kind};
use crate::DEFAULT_BSONIFY;

/// Converts values into documents.
///
/// A `Bsonify` only holds its [BsonifyConfig]; every call builds its own
/// output, so one handle can be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use bsonify::bsonify::Bsonify;
/// use bsonify::doc;
/// use indexmap::IndexMap;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut address = IndexMap::new();
/// address.insert("city", "Paris");
/// let mut user = IndexMap::new();
/// user.insert("address", address);
///
/// let bsonify = Bsonify::builder().field_separator("/").build()?;
/// assert_eq!(bsonify.set_update_document(&user)?, doc!{ "address/city": "Paris" });
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bsonify {
    config: BsonifyConfig,
}

impl Bsonify {
    /// Creates a handle with the default configuration.
    pub fn new() -> Self {
        Bsonify {
            config: BsonifyConfig::new(),
        }
    }

    pub fn builder() -> BsonifyBuilder {
        BsonifyBuilder::new()
    }

    pub(crate) fn with_config(config: BsonifyConfig) -> Self {
        Bsonify { config }
    }

    pub fn config(&self) -> &BsonifyConfig {
        &self.config
    }

    /// Returns a document that mirrors the structure of `value`.
    ///
    /// Nested records and maps become nested documents; unset optionals are
    /// kept as [Value::Unset](crate::common::Value::Unset) entries.
    ///
    /// # Errors
    ///
    /// * [ErrorKind::InvalidInput](crate::errors::ErrorKind::InvalidInput) if
    ///   `value` is not a record or map once dereferenced, or is unset.
    /// * [ErrorKind::InvalidKeyType](crate::errors::ErrorKind::InvalidKeyType)
    ///   if a map on the way has a non-string key.
    pub fn dump<T: Inspect>(&self, value: &T) -> BsonResult<Document> {
        log::debug!("Dumping value of type {}", value.type_name());
        engine::dump(composite(value)?)
    }

    /// Returns a flat document for a `$set` update: one entry per leaf of
    /// `value`, keyed by its path joined with the configured separator.
    ///
    /// Entries come out in field order and duplicate paths are kept.
    ///
    /// # Errors
    ///
    /// Same as [Bsonify::dump].
    pub fn set_update_document<T: Inspect>(&self, value: &T) -> BsonResult<Document> {
        log::debug!("Building update document for value of type {}", value.type_name());
        engine::flatten(composite(value)?, self.config.field_separator())
    }

    /// Like [Bsonify::set_update_document], collected into an [UpdateMap].
    ///
    /// When two paths collide the later entry wins and a warning is logged.
    ///
    /// # Errors
    ///
    /// Same as [Bsonify::dump].
    pub fn set_update_mapping<T: Inspect>(&self, value: &T) -> BsonResult<UpdateMap> {
        Ok(self.set_update_document(value)?.into_update_map())
    }
}

/// Dereferences `value` and checks that it can be walked.
fn composite<T: Inspect>(value: &T) -> BsonResult<Kind<'_>> {
    let (_, kind) = engine::dereference(value)?;
    if kind.is_composite() {
        Ok(kind)
    } else {
        log::error!("Unsupported argument type {} ({})", value.type_name(), kind.name());
        Err(BsonError::invalid_input(value.type_name()))
    }
}

/// [Bsonify::dump] with the default configuration.
pub fn dump<T: Inspect>(value: &T) -> BsonResult<Document> {
    DEFAULT_BSONIFY.dump(value)
}

/// [Bsonify::set_update_document] with the default configuration.
pub fn set_update_document<T: Inspect>(value: &T) -> BsonResult<Document> {
    DEFAULT_BSONIFY.set_update_document(value)
}

/// [Bsonify::set_update_mapping] with the default configuration.
pub fn set_update_mapping<T: Inspect>(value: &T) -> BsonResult<UpdateMap> {
    DEFAULT_BSONIFY.set_update_mapping(value)
}
