use crate::common::DEFAULT_FIELD_SEPARATOR;
use crate::errors::{BsonError, BsonResult, ErrorKind};

/// Options shared by every conversion made through a
/// [Bsonify](crate::bsonify::Bsonify) handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BsonifyConfig {
    field_separator: String,
}

impl BsonifyConfig {
    /// Creates the default configuration, joining paths with `"."`.
    pub fn new() -> Self {
        BsonifyConfig {
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
        }
    }

    /// The separator placed between path segments in update documents.
    pub fn field_separator(&self) -> &str {
        &self.field_separator
    }

    /// Sets the path separator. The separator cannot be empty.
    pub fn set_field_separator(&mut self, separator: &str) -> BsonResult<()> {
        if separator.is_empty() {
            log::error!("Field separator cannot be empty");
            return Err(BsonError::new(
                "Field separator cannot be empty",
                ErrorKind::InvalidConfiguration,
            ));
        }
        self.field_separator = separator.to_string();
        Ok(())
    }
}

impl Default for BsonifyConfig {
    fn default() -> Self {
        BsonifyConfig::new()
    }
}
