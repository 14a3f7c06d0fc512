use zoneparse_application::pipeline::{aggregate, decode_record, Aggregator};
use zoneparse_domain::{RecordType, TypedRecord};

mod helpers;
use helpers::canonical;

fn typed(record_type: RecordType, rdata: &str, line: usize) -> TypedRecord {
    let mut record = canonical(record_type, rdata);
    record.line = line;
    decode_record(record).unwrap()
}

fn sample() -> Vec<TypedRecord> {
    vec![
        typed(RecordType::MX, "10 mail.example.com.", 1),
        typed(RecordType::A, "192.0.2.1", 2),
        typed(RecordType::TXT, "hello", 3),
        typed(RecordType::A, "192.0.2.2", 4),
    ]
}

#[test]
fn test_grouped_buckets_keep_input_order() {
    let records = aggregate(sample(), false);
    let grouped = records.as_grouped().unwrap();

    let a_rdata: Vec<&str> = grouped
        .get(RecordType::A)
        .iter()
        .map(|r| r.rdata.as_str())
        .collect();
    assert_eq!(a_rdata, ["192.0.2.1", "192.0.2.2"]);
    assert_eq!(grouped.get(RecordType::MX).len(), 1);
    assert_eq!(grouped.get(RecordType::TXT).len(), 1);
    assert!(grouped.get(RecordType::SOA).is_empty());
}

#[test]
fn test_flat_keeps_input_order() {
    let records = aggregate(sample(), true);
    let flat = records.as_flat().unwrap();

    let types: Vec<RecordType> = flat.iter().map(TypedRecord::record_type).collect();
    assert_eq!(
        types,
        [RecordType::MX, RecordType::A, RecordType::TXT, RecordType::A]
    );
}

#[test]
fn test_incremental_aggregator_counts() {
    let mut aggregator = Aggregator::new(false);
    assert!(aggregator.is_empty());

    for record in sample() {
        aggregator.push(record);
    }

    assert_eq!(aggregator.len(), 4);
    assert_eq!(aggregator.finish().len(), 4);
}

#[test]
fn test_empty_input_still_has_every_bucket() {
    let records = aggregate(Vec::new(), false);

    let json = serde_json::to_value(&records).unwrap();
    let buckets = json.as_object().unwrap();
    assert_eq!(buckets.len(), RecordType::COUNT);
    assert!(buckets.values().all(|v| v.as_array().is_some_and(Vec::is_empty)));
}
