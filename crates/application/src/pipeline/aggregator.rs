//! Collects decoded records into the configured output shape.

use zoneparse_domain::{RecordsByType, TypedRecord, ZoneRecords};

/// Incremental aggregation, fed one record at a time in input order.
#[derive(Debug)]
pub struct Aggregator {
    records: ZoneRecords,
}

impl Aggregator {
    pub fn new(flatten: bool) -> Self {
        let records = if flatten {
            ZoneRecords::Flat(Vec::new())
        } else {
            ZoneRecords::Grouped(RecordsByType::new())
        };
        Self { records }
    }

    pub fn push(&mut self, record: TypedRecord) {
        match &mut self.records {
            ZoneRecords::Grouped(grouped) => grouped.push(record),
            ZoneRecords::Flat(flat) => flat.push(record),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finish(self) -> ZoneRecords {
        self.records
    }
}

pub fn aggregate<I>(records: I, flatten: bool) -> ZoneRecords
where
    I: IntoIterator<Item = TypedRecord>,
{
    let mut aggregator = Aggregator::new(flatten);
    for record in records {
        aggregator.push(record);
    }
    aggregator.finish()
}
