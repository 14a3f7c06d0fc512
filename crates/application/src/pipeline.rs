pub mod aggregator;
pub mod decoder;
pub mod resolver;
pub mod sanitizer;

pub use aggregator::{aggregate, Aggregator};
pub use decoder::{decode, decode_record};
pub use resolver::{resolve, resolve_line, LineOutcome, ResolvedZone, SkipReason};
pub use sanitizer::{sanitize, Sanitizer};
