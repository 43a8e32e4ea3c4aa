use crate::common::Value;
use crate::document::Document;
use crate::engine::fields::children;
use crate::errors::BsonResult;
use crate::inspect::{Inspect, Kind};

/// Renders a composite value as a nested document mirroring its shape.
pub(crate) fn dump(kind: Kind<'_>) -> BsonResult<Document> {
    let children = children(kind)?;
    let mut doc = Document::with_capacity(children.len());
    for child in children {
        doc.push(child.name, render(child.value)?);
    }
    Ok(doc)
}

/// Renders any value as a single [Value].
///
/// Unset indirections become their unset representation, set ones are
/// looked through, composites become nested documents and sequences become
/// arrays of rendered elements.
pub(crate) fn render(value: &dyn Inspect) -> BsonResult<Value> {
    render_kind(value, value.kind())
}

pub(crate) fn render_kind<'a>(value: &'a dyn Inspect, kind: Kind<'a>) -> BsonResult<Value> {
    match kind {
        Kind::Indirection(None) => Ok(value.unset()),
        Kind::Indirection(Some(inner)) => render(inner),
        Kind::Sequence(elements) => {
            let values = elements.map(render).collect::<BsonResult<Vec<_>>>()?;
            Ok(Value::Array(values))
        }
        Kind::Scalar(scalar) => Ok(scalar),
        composite => Ok(Value::Document(dump(composite)?)),
    }
}
