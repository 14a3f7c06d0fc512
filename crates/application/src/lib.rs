//! Zoneparse Application Layer
//!
//! BIND zone text goes through four stages: [`pipeline::sanitizer`],
//! [`pipeline::resolver`], [`pipeline::decoder`] and
//! [`pipeline::aggregator`]. [`ParseZoneUseCase`] runs them in one pass.

pub mod pipeline;
pub mod use_cases;

pub use use_cases::ParseZoneUseCase;

use zoneparse_domain::{ParseOptions, ParsedZone, ZoneError};

/// Parses `input` with the given options.
///
/// ```
/// use zoneparse_application::parse_zone;
/// use zoneparse_domain::{ParseOptions, RecordType};
///
/// let zone = parse_zone("example.com. 3600 IN A 192.0.2.1", &ParseOptions::default()).unwrap();
/// let grouped = zone.records.as_grouped().unwrap();
/// assert_eq!(grouped.get(RecordType::A).len(), 1);
/// ```
pub fn parse_zone(input: &str, options: &ParseOptions) -> Result<ParsedZone, ZoneError> {
    ParseZoneUseCase::new(*options).execute(input)
}
