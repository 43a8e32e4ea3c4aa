use crate::bsonify::Bsonify;
use crate::bsonify_config::BsonifyConfig;
use crate::errors::{BsonError, BsonResult};

/// Builder for a configured [Bsonify] handle.
///
/// Errors raised by a setter are captured and returned by [BsonifyBuilder::build],
/// so calls can be chained without intermediate `?`.
///
/// # Examples
///
/// ```rust
/// use bsonify::bsonify::Bsonify;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bsonify = Bsonify::builder()
///     .field_separator("/")
///     .build()?;
/// assert_eq!(bsonify.config().field_separator(), "/");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct BsonifyBuilder {
    error: Option<BsonError>,
    config: BsonifyConfig,
}

impl BsonifyBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        BsonifyBuilder {
            error: None,
            config: BsonifyConfig::new(),
        }
    }

    /// Sets the separator used to join path segments in update documents.
    ///
    /// An empty separator is rejected when [BsonifyBuilder::build] is called.
    pub fn field_separator(mut self, field_separator: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_field_separator(field_separator) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Returns the configured handle, or the first error captured by a setter.
    pub fn build(self) -> BsonResult<Bsonify> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Bsonify::with_config(self.config)),
        }
    }
}
