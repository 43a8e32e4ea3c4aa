use bsonify::document::Document;
use bsonify::errors::BsonResult;
use bsonify::inspect::Inspect;
use bsonify::{dump, set_update_document, set_update_mapping};

/// The three outputs of the default converter for a single value.
pub struct Outputs {
    pub dump: Document,
    pub update: Document,
    pub mapping: bsonify::document::UpdateMap,
}

/// Runs every entry point on `value`, failing on the first error.
pub fn convert_all<T: Inspect>(value: &T) -> BsonResult<Outputs> {
    Ok(Outputs {
        dump: dump(value)?,
        update: set_update_document(value)?,
        mapping: set_update_mapping(value)?,
    })
}

/// Asserts that flattening the dump of `value` gives its update document.
pub fn assert_flatten_duality<T: Inspect>(value: &T) -> BsonResult<()> {
    let outputs = convert_all(value)?;
    assert_eq!(
        outputs.dump.flatten("."),
        outputs.update,
        "flattened dump differs from update document of {}",
        value.type_name()
    );
    Ok(())
}

/// Asserts that `key` is present in none of the outputs.
pub fn assert_absent_everywhere(outputs: &Outputs, key: &str) {
    assert!(!outputs.dump.contains_key(key), "{} found in dump", key);
    assert!(!outputs.update.contains_key(key), "{} found in update document", key);
    assert!(!outputs.mapping.contains_key(key), "{} found in update mapping", key);
}
