use crate::errors::RecordError;
use crate::record::{RecordType, TypedRecord};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::array;

/// Records bucketed by type. Every type has a bucket, empty or not, and
/// each bucket keeps insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsByType {
    buckets: [Vec<TypedRecord>; RecordType::COUNT],
}

impl RecordsByType {
    pub fn new() -> Self {
        Self {
            buckets: array::from_fn(|_| Vec::new()),
        }
    }

    pub fn push(&mut self, record: TypedRecord) {
        self.buckets[record.record_type().index()].push(record);
    }

    pub fn get(&self, record_type: RecordType) -> &[TypedRecord] {
        &self.buckets[record_type.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &[TypedRecord])> {
        RecordType::ALL
            .iter()
            .map(move |t| (*t, self.buckets[t.index()].as_slice()))
    }

    /// Total number of records across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

impl Default for RecordsByType {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for RecordsByType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RecordType::COUNT))?;
        for (record_type, records) in self.iter() {
            map.serialize_entry(record_type.as_str(), records)?;
        }
        map.end()
    }
}

/// Output shape selected by `ParseOptions::flatten`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ZoneRecords {
    Grouped(RecordsByType),
    Flat(Vec<TypedRecord>),
}

impl ZoneRecords {
    pub fn len(&self) -> usize {
        match self {
            ZoneRecords::Grouped(grouped) => grouped.len(),
            ZoneRecords::Flat(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_grouped(&self) -> Option<&RecordsByType> {
        match self {
            ZoneRecords::Grouped(grouped) => Some(grouped),
            ZoneRecords::Flat(_) => None,
        }
    }

    pub fn as_flat(&self) -> Option<&[TypedRecord]> {
        match self {
            ZoneRecords::Grouped(_) => None,
            ZoneRecords::Flat(records) => Some(records),
        }
    }
}

/// Result of parsing one zone file.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParsedZone {
    /// Zone origin after the last `$ORIGIN` (or the SOA owner), with a
    /// trailing dot.
    pub origin: Option<String>,

    /// Normalized `$TTL`, or the default when absent.
    pub ttl: u32,

    pub records: ZoneRecords,

    /// Records skipped because their rdata failed to decode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<RecordError>,
}
