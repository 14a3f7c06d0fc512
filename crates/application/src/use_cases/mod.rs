pub mod parse_zone;

pub use parse_zone::ParseZoneUseCase;
