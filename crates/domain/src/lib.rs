//! Zoneparse Domain Layer
pub mod config;
pub mod errors;
pub mod record;
pub mod sanitized_line;
pub mod zone;
pub mod zone_state;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ParseOptions};
pub use errors::{Arity, DecodeError, RecordError, ZoneError};
pub use record::{CanonicalRecord, Metadata, RecordData, RecordType, TypedRecord};
pub use sanitized_line::SanitizedLine;
pub use zone::{ParsedZone, RecordsByType, ZoneRecords};
pub use zone_state::{ZoneState, DEFAULT_CLASS, DEFAULT_TTL};
