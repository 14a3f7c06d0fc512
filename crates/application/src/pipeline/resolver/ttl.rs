//! TTL and duration parsing shared by `$TTL`, record TTLs and SOA timers.

use zoneparse_domain::{ZoneState, DEFAULT_TTL};

/// Seconds per BIND duration unit.
fn unit_seconds(unit: char) -> Option<f64> {
    match unit.to_ascii_lowercase() {
        's' => Some(1.0),
        'm' => Some(60.0),
        'h' => Some(3_600.0),
        'd' => Some(86_400.0),
        'w' => Some(604_800.0),
        _ => None,
    }
}

/// Resolves a TTL token to seconds, falling back to [`DEFAULT_TTL`] for a
/// missing or unparseable value.
pub fn normalize_ttl(raw: Option<&str>) -> u32 {
    raw.and_then(parse_duration).unwrap_or(DEFAULT_TTL)
}

/// Zone-level TTL: the last `$TTL` seen, or the default.
pub fn zone_ttl(state: &ZoneState) -> u32 {
    normalize_ttl(state.default_ttl.as_deref())
}

/// Parses `3600`, `1h`, `1.5h` or compound forms such as `1w2d` into
/// seconds. Returns `None` for anything else, including values that do not
/// fit in 32 bits.
pub fn parse_duration(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok();
    }

    let mut total = 0.0_f64;
    let mut number = String::new();

    for c in raw.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }

        let seconds = unit_seconds(c)?;
        let value: f64 = number.parse().ok()?;
        total += value * seconds;
        number.clear();
    }

    // Trailing digits without a unit.
    if !number.is_empty() {
        return None;
    }

    if total.is_finite() && total <= f64::from(u32::MAX) {
        Some(total.round() as u32)
    } else {
        None
    }
}
