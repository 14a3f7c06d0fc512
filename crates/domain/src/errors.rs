use crate::record::RecordType;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Number of rdata fields a record type accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    pub fn accepts(&self, found: usize) -> bool {
        match *self {
            Arity::Exactly(n) => found == n,
            Arity::AtLeast(n) => found >= n,
            Arity::Between(min, max) => (min..=max).contains(&found),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Between(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

/// Why the rdata of a single record could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DecodeError {
    #[error("{record_type} expects {expected} rdata fields, found {found}")]
    FieldCount {
        record_type: RecordType,
        expected: Arity,
        found: usize,
    },

    #[error("Invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid IP address: {value}")]
    InvalidAddress { value: String },

    #[error("Invalid LOC coordinates: {reason}")]
    InvalidLocation { reason: String },
}

/// A [`DecodeError`] scoped to the record it came from.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("line {line}: {record_type} record for {name}: {source}")]
pub struct RecordError {
    pub line: usize,

    pub name: String,

    pub record_type: RecordType,

    pub source: DecodeError,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoneError {
    #[error("Record decode failed: {0}")]
    Decode(#[from] RecordError),
}
