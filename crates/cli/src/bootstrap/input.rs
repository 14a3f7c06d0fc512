use anyhow::Context;
use std::io::Read;
use tracing::debug;

/// Reads the zone from `path`, or from stdin when the path is absent or `-`.
pub fn read_zone_text(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != "-" => {
            debug!(path, "Reading zone file");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read zone file {}", path))
        }
        _ => {
            debug!("Reading zone from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read zone from stdin")?;
            Ok(text)
        }
    }
}
