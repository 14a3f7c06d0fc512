mod input;
mod logging;

pub use input::read_zone_text;
pub use logging::init_logging;

use tracing::info;
use zoneparse_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config: &Config) {
    info!(
        flatten = config.parser.flatten,
        strict = config.parser.strict,
        keep_trailing_dot = config.parser.keep_trailing_dot,
        preserve_spacing = config.parser.preserve_spacing,
        "Parser configuration loaded"
    );
}
