use crate::errors::{BsonError, BsonResult, ErrorKind};
use crate::inspect::{Inspect, Kind};

/// Unwraps every layer of indirection around `value` and returns the
/// concrete value reached together with its classification.
///
/// An unset layer fails with [ErrorKind::InvalidInput] naming the type of
/// `value` itself, not of the layer that was unset. Only entry points use
/// this; unset values nested inside a composite are rendered, not rejected.
pub(crate) fn dereference(value: &dyn Inspect) -> BsonResult<(&dyn Inspect, Kind<'_>)> {
    let mut current = value;
    loop {
        match current.kind() {
            Kind::Indirection(Some(inner)) => current = inner,
            Kind::Indirection(None) => {
                let type_name = value.type_name();
                log::error!("Cannot dereference nil pointer or interface of type {}", type_name);
                return Err(BsonError::new(
                    &format!("nil pointer or interface: {}", type_name),
                    ErrorKind::InvalidInput(type_name.to_string()),
                ));
            }
            kind => return Ok((current, kind)),
        }
    }
}
