pub mod errors;
pub mod logging;
pub mod parse;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use parse::ParseOptions;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
