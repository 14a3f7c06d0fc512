use super::RecordType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat `key -> value` pairs lifted out of a record comment.
pub type Metadata = BTreeMap<String, String>;

/// A record after field resolution, before its rdata is decoded.
///
/// `name` is always fully qualified here; the trailing dot is only removed
/// when the record is rendered for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub name: String,

    pub record_type: RecordType,

    pub ttl: u32,

    pub class: String,

    pub rdata: String,

    pub comment: Option<String>,

    pub metadata: Option<Metadata>,

    /// 1-based source line the record started on.
    pub line: usize,
}
