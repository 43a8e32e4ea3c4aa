use bsonify::bsonify::Bsonify;
use bsonify::errors::BsonResult;
use bsonify_derive::Inspect;
use indexmap::IndexMap;

#[derive(Inspect)]
pub struct StressAddress {
    #[bson = "street"]
    pub street: String,
    #[bson = "zip,omitempty"]
    pub zip: Option<String>,
}

#[derive(Inspect)]
pub struct StressRecord {
    #[bson = "first_name"]
    pub first_name: Option<String>,
    #[bson = "processed"]
    pub processed: Option<bool>,
    #[bson = "note,omitempty"]
    pub note: String,
    #[bson = "address"]
    pub address: Option<Box<StressAddress>>,
    #[bson = "attributes"]
    pub attributes: IndexMap<String, u64>,
}

fn record(i: u64) -> StressRecord {
    let mut attributes = IndexMap::new();
    attributes.insert("index".to_string(), i);
    attributes.insert("bucket".to_string(), i % 16);
    StressRecord {
        first_name: Some(format!("name-{}", i)),
        processed: if i % 2 == 0 { Some(false) } else { None },
        note: String::new(),
        address: Some(Box::new(StressAddress {
            street: format!("street-{}", i),
            zip: None,
        })),
        attributes,
    }
}

fn main() -> BsonResult<()> {
    colog::init();
    println!("Starting stress test...");

    let count = 1_000_000u64;
    let records: Vec<StressRecord> = (0..count).map(record).collect();
    let bsonify = Bsonify::new();

    let start = std::time::Instant::now();
    let mut entries = 0;
    for record in &records {
        entries += bsonify.dump(record)?.len();
    }
    println!("Dumped {} records ({} entries) in {:?}", count, entries, start.elapsed());

    let start = std::time::Instant::now();
    let mut entries = 0;
    for record in &records {
        entries += bsonify.set_update_document(record)?.len();
    }
    println!("Flattened {} records ({} entries) in {:?}", count, entries, start.elapsed());

    let start = std::time::Instant::now();
    let mut entries = 0;
    for record in &records {
        entries += bsonify.set_update_mapping(record)?.len();
    }
    println!("Mapped {} records ({} entries) in {:?}", count, entries, start.elapsed());

    Ok(())
}
