use bsonify::bsonify::Bsonify;
use bsonify::common::Value;
use bsonify::doc;
use bsonify::document::Document;
use bsonify::errors::{BsonResult, ErrorKind};
use bsonify::inspect::Inspect;
use bsonify::{dump, set_update_document, set_update_mapping};
use bsonify_derive::Inspect;
use bsonify_int_test::test_util::{assert_flatten_duality, convert_all};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;
use std::thread;

#[ctor::ctor]
fn init() {
    colog::init();
}

#[derive(Inspect, Clone)]
struct Address {
    #[bson = "street"]
    street: String,
    #[bson = "zip,omitempty"]
    zip: Option<String>,
}

#[derive(Inspect, Clone)]
struct Customer {
    #[bson = "name"]
    name: String,
    #[bson = "address"]
    address: Address,
    #[bson = "billing"]
    billing: Option<Box<Address>>,
    #[bson = "shared"]
    shared: Option<Arc<Address>>,
    #[bson = "labels"]
    labels: IndexMap<String, String>,
    #[bson = "scores,omitempty"]
    scores: Vec<u32>,
}

fn address() -> Address {
    Address {
        street: "Main".to_string(),
        zip: Some("0150".to_string()),
    }
}

fn customer() -> Customer {
    let mut labels = IndexMap::new();
    labels.insert("tier".to_string(), "gold".to_string());
    labels.insert("region".to_string(), "north".to_string());
    Customer {
        name: "Ann".to_string(),
        address: address(),
        billing: Some(Box::new(address())),
        shared: None,
        labels,
        scores: vec![3, 5],
    }
}

#[test]
fn test_set_indirection_adds_no_segment() -> BsonResult<()> {
    let dumped = dump(&customer())?;
    assert_eq!(dumped.get("address"), dumped.get("billing"));

    let update = set_update_document(&customer())?;
    assert_eq!(update.get("billing.street"), Some(&Value::from("Main")));
    assert_eq!(update.get("billing.zip"), Some(&Value::from("0150")));
    assert!(!update.keys().any(|k| k.contains("billing.billing")));
    Ok(())
}

#[test]
fn test_wrapped_record_matches_unwrapped() -> BsonResult<()> {
    let plain = customer();
    let boxed = Some(Box::new(customer()));
    let shared = Rc::new(Some(Arc::new(customer())));
    for outputs in [convert_all(&boxed)?, convert_all(&shared)?] {
        assert_eq!(outputs.dump, dump(&plain)?);
        assert_eq!(outputs.update, set_update_document(&plain)?);
    }
    Ok(())
}

#[test]
fn test_unset_indirection_is_single_leaf() -> BsonResult<()> {
    let outputs = convert_all(&customer())?;
    let unset = Value::unset::<Option<Arc<Address>>>();
    assert_eq!(outputs.dump.get("shared"), Some(&unset));
    assert_eq!(outputs.update.get("shared"), Some(&unset));
    assert_eq!(outputs.mapping.get("shared"), Some(&unset));
    assert!(!outputs.update.keys().any(|k| k.starts_with("shared.")));
    Ok(())
}

#[test]
fn test_nested_dump_shape() -> BsonResult<()> {
    let mut value = customer();
    value.billing = None;
    value.scores.clear();
    assert_eq!(
        dump(&value)?,
        doc!{
            name: "Ann",
            address: {
                street: "Main",
                zip: "0150",
            },
            billing: (Value::unset::<Option<Box<Address>>>()),
            shared: (Value::unset::<Option<Arc<Address>>>()),
            labels: {
                tier: "gold",
                region: "north",
            },
        }
    );
    Ok(())
}

#[test]
fn test_flat_update_shape() -> BsonResult<()> {
    assert_eq!(
        set_update_document(&customer())?,
        doc!{
            name: "Ann",
            "address.street": "Main",
            "address.zip": "0150",
            "billing.street": "Main",
            "billing.zip": "0150",
            shared: (Value::unset::<Option<Arc<Address>>>()),
            "labels.tier": "gold",
            "labels.region": "north",
            scores: [3, 5],
        }
    );
    Ok(())
}

#[test]
fn test_flatten_duality() -> BsonResult<()> {
    assert_flatten_duality(&customer())?;

    let mut value = customer();
    value.address.zip = None;
    value.labels.clear();
    assert_flatten_duality(&value)?;

    let mut nested: BTreeMap<String, BTreeMap<String, Option<i64>>> = BTreeMap::new();
    nested.entry("a".to_string()).or_default().insert("x".to_string(), Some(1));
    nested.entry("a".to_string()).or_default().insert("y".to_string(), None);
    nested.entry("b".to_string()).or_default();
    assert_flatten_duality(&nested)
}

#[derive(Inspect, Clone, PartialEq, Eq, Hash)]
enum MapKey {
    Name(String),
    Code(u32),
}

#[test]
fn test_non_string_key_fails_whole_call() {
    let mut map = IndexMap::new();
    map.insert(MapKey::Name("a".to_string()), 1);
    map.insert(MapKey::Code(7), 2);
    map.insert(MapKey::Name("b".to_string()), 3);

    let expected = ErrorKind::InvalidKeyType(std::any::type_name::<MapKey>().to_string());
    assert_eq!(dump(&map).err().unwrap().kind(), &expected);
    assert_eq!(set_update_document(&map).err().unwrap().kind(), &expected);
    assert_eq!(set_update_mapping(&map).err().unwrap().kind(), &expected);
}

#[test]
fn test_union_string_keys_are_accepted() -> BsonResult<()> {
    let mut map = IndexMap::new();
    map.insert(MapKey::Name("a".to_string()), 1);
    map.insert(MapKey::Name("b".to_string()), 2);
    assert_eq!(dump(&map)?, doc!{ a: 1, b: 2 });
    Ok(())
}

#[test]
fn test_nested_non_string_key_fails() {
    let mut inner = HashMap::new();
    inner.insert(5i64, "five");
    let mut outer = IndexMap::new();
    outer.insert("ok", HashMap::new());
    outer.insert("bad", inner);

    let err = set_update_document(&outer).err().unwrap();
    assert_eq!(err.kind(), &ErrorKind::InvalidKeyType("i64".to_string()));
    assert_eq!(err.message(), "map key type should be string: i64");
}

#[test]
fn test_scalar_top_level_is_invalid_input() {
    let err = dump(&42u8).err().unwrap();
    assert_eq!(err.kind(), &ErrorKind::InvalidInput("u8".to_string()));
    assert_eq!(err.message(), "unsupported argument type: u8");

    let err = set_update_document(&Some(Box::new(1.5f64))).err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));

    let err = set_update_mapping(&vec![address()]).err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
}

#[test]
fn test_unset_top_level_is_invalid_input() {
    let value: Option<Customer> = None;
    let expected = ErrorKind::InvalidInput(std::any::type_name::<Option<Customer>>().to_string());
    assert_eq!(dump(&value).err().unwrap().kind(), &expected);
    assert_eq!(set_update_document(&value).err().unwrap().kind(), &expected);
    assert_eq!(set_update_mapping(&value).err().unwrap().kind(), &expected);
}

#[derive(Inspect)]
struct Versioned {
    #[bson = "version"]
    schema_version: u32,
    #[bson = "version"]
    document_version: u32,
    #[bson = "meta"]
    meta: IndexMap<String, u32>,
}

#[test]
fn test_mapping_keeps_later_duplicate() -> BsonResult<()> {
    let mut meta = IndexMap::new();
    meta.insert("rev".to_string(), 1);
    let value = Versioned {
        schema_version: 1,
        document_version: 2,
        meta,
    };

    assert_eq!(
        set_update_document(&value)?,
        doc!{ version: 1, version: 2, "meta.rev": 1 }
    );

    let mapping = set_update_mapping(&value)?;
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get("version"), Some(&Value::U32(2)));
    Ok(())
}

#[test]
fn test_flattened_key_collides_with_dotted_key() -> BsonResult<()> {
    let value = doc!{
        "a.b": 1,
        a: { b: 2 },
    };
    assert_eq!(set_update_document(&value)?, doc!{ "a.b": 1, "a.b": 2 });
    assert_eq!(set_update_mapping(&value)?.get("a.b"), Some(&Value::I32(2)));
    Ok(())
}

#[test]
fn test_dynamic_values() -> BsonResult<()> {
    let value = Value::Document(doc!{
        user: {
            name: "Bob",
            deleted: (Value::Null),
        },
        tags: ["x"],
    });
    assert_eq!(
        set_update_document(&value)?,
        doc!{
            "user.name": "Bob",
            "user.deleted": (Value::Null),
            tags: ["x"],
        }
    );

    let err = dump(&Value::from("text")).err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
    Ok(())
}

#[test]
fn test_trait_objects_behind_box() -> BsonResult<()> {
    let values: Vec<Box<dyn Inspect>> = vec![Box::new(address()), Box::new(doc!{ k: 1 })];
    assert_eq!(dump(&values[0])?, dump(&address())?);
    assert_eq!(set_update_document(&values[1])?, doc!{ k: 1 });
    Ok(())
}

#[test]
fn test_custom_separator() -> BsonResult<()> {
    let bsonify = Bsonify::builder().field_separator("/").build()?;
    let update = bsonify.set_update_document(&customer())?;
    assert_eq!(update.get("address/street"), Some(&Value::from("Main")));
    assert_eq!(bsonify.dump(&customer())?.flatten("/"), update);

    let mapping = bsonify.set_update_mapping(&customer())?;
    assert!(mapping.contains_key("labels/tier"));
    Ok(())
}

#[test]
fn test_empty_separator_is_rejected() {
    let err = Bsonify::builder().field_separator("").build().err().unwrap();
    assert_eq!(err.kind(), &ErrorKind::InvalidConfiguration);
}

#[test]
fn test_shared_between_threads() -> BsonResult<()> {
    let bsonify = Arc::new(Bsonify::new());
    let expected = bsonify.set_update_document(&customer())?;

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let bsonify = bsonify.clone();
            thread::spawn(move || {
                let mut value = customer();
                value.name = format!("user-{}", i);
                bsonify.set_update_document(&value)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let update: Document = handle.join().unwrap()?;
        assert_eq!(update.get("name"), Some(&Value::from(format!("user-{}", i))));
        assert_eq!(update.len(), expected.len());
    }
    Ok(())
}

#[test]
fn test_display_renders_update_as_json() -> BsonResult<()> {
    let mut value = customer();
    value.billing = None;
    let update = set_update_document(&value)?;
    let json = update.to_string();
    assert!(json.contains("\"address.street\""));
    assert!(json.contains("null"));
    Ok(())
}
