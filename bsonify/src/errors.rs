use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;
use std::sync::Arc;

/// Error kinds for bsonify operations.
///
/// Every kind is fatal to the call that raised it; no partial document is
/// returned alongside an error.
///
/// # Examples
///
/// ```rust
/// use bsonify::errors::{BsonError, BsonResult, ErrorKind};
///
/// fn example() -> BsonResult<()> {
///     Err(BsonError::new("not a record", ErrorKind::InvalidInput("i32".to_string())))
/// }
///
/// assert!(example().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// The top-level value is not a record or an associative value, or it is
    /// an unset indirection. Carries the offending value's type name.
    InvalidInput(String),
    /// An associative value has a key that is not a string. Carries the
    /// key's type name.
    InvalidKeyType(String),
    /// A builder option was rejected.
    InvalidConfiguration,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidInput(type_name) => write!(f, "Invalid input ({})", type_name),
            ErrorKind::InvalidKeyType(type_name) => write!(f, "Invalid key type ({})", type_name),
            ErrorKind::InvalidConfiguration => write!(f, "Invalid configuration"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom bsonify error type.
///
/// `BsonError` carries a message, an [ErrorKind], an optional cause and the
/// backtrace captured where it was created.
///
/// # Examples
///
/// ```rust
/// use bsonify::errors::{BsonError, ErrorKind};
///
/// let cause = BsonError::new("map key type should be string: i32", ErrorKind::InvalidKeyType("i32".into()));
/// let err = BsonError::new_with_cause("failed to flatten value", ErrorKind::InternalError, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct BsonError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<BsonError>>,
    backtrace: Arc<Backtrace>,
}

impl BsonError {
    /// Creates a new `BsonError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        BsonError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Creates a new `BsonError` chained to the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: BsonError) -> Self {
        BsonError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Shorthand for an [ErrorKind::InvalidInput] error about `type_name`.
    pub fn invalid_input(type_name: &str) -> Self {
        BsonError::new(
            &format!("unsupported argument type: {}", type_name),
            ErrorKind::InvalidInput(type_name.to_string()),
        )
    }

    /// Shorthand for an [ErrorKind::InvalidKeyType] error about `type_name`.
    pub fn invalid_key_type(type_name: &str) -> Self {
        BsonError::new(
            &format!("map key type should be string: {}", type_name),
            ErrorKind::InvalidKeyType(type_name.to_string()),
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&BsonError> {
        self.cause.as_deref()
    }
}

impl Display for BsonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for BsonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for BsonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for bsonify operations.
pub type BsonResult<T> = Result<T, BsonError>;

#[cfg(feature = "serde")]
impl serde::ser::Error for BsonError {
    fn custom<T: Display>(msg: T) -> Self {
        BsonError::new(&msg.to_string(), ErrorKind::InternalError)
    }
}

impl From<std::fmt::Error> for BsonError {
    fn from(err: std::fmt::Error) -> Self {
        BsonError::new(
            &format!("Formatting error: {}", err),
            ErrorKind::InternalError,
        )
    }
}

impl From<String> for BsonError {
    fn from(msg: String) -> Self {
        BsonError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for BsonError {
    fn from(msg: &str) -> Self {
        BsonError::new(msg, ErrorKind::InternalError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bson_error_new_creates_error() {
        let error = BsonError::new("An error occurred", ErrorKind::InternalError);
        assert_eq!(error.message, "An error occurred");
        assert_eq!(error.error_kind, ErrorKind::InternalError);
        assert!(error.cause.is_none());
    }

    #[test]
    fn bson_error_new_with_cause_creates_error() {
        let cause = BsonError::invalid_key_type("i32");
        let error = BsonError::new_with_cause("An error occurred", ErrorKind::InternalError, cause);
        assert_eq!(error.message(), "An error occurred");
        assert_eq!(
            error.cause().map(|c| c.kind().clone()),
            Some(ErrorKind::InvalidKeyType("i32".to_string()))
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn invalid_input_carries_type_name() {
        let error = BsonError::invalid_input("u64");
        assert_eq!(error.kind(), &ErrorKind::InvalidInput("u64".to_string()));
        assert_eq!(error.to_string(), "unsupported argument type: u64");
    }

    #[test]
    fn invalid_key_type_carries_type_name() {
        let error = BsonError::invalid_key_type("bool");
        assert_eq!(error.kind(), &ErrorKind::InvalidKeyType("bool".to_string()));
        assert_eq!(error.to_string(), "map key type should be string: bool");
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::InvalidInput("i8".into()).to_string(), "Invalid input (i8)");
        assert_eq!(ErrorKind::InvalidKeyType("i8".into()).to_string(), "Invalid key type (i8)");
        assert_eq!(ErrorKind::InvalidConfiguration.to_string(), "Invalid configuration");
        assert_eq!(ErrorKind::InternalError.to_string(), "Internal error");
    }

    #[test]
    fn debug_includes_cause() {
        let cause = BsonError::new("inner", ErrorKind::InternalError);
        let error = BsonError::new_with_cause("outer", ErrorKind::InternalError, cause);
        let debug = format!("{:?}", error);
        assert!(debug.starts_with("outer\nCaused by: inner"));
    }

    #[test]
    fn from_string_and_str() {
        let error: BsonError = "boom".into();
        assert_eq!(error.kind(), &ErrorKind::InternalError);
        let error: BsonError = String::from("boom").into();
        assert_eq!(error.message(), "boom");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_custom_error_is_internal() {
        let error = <BsonError as serde::ser::Error>::custom("cannot serialize");
        assert_eq!(error.kind(), &ErrorKind::InternalError);
        assert_eq!(error.message(), "cannot serialize");
    }
}
