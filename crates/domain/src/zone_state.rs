/// TTL applied when neither the record nor a `$TTL` directive provides one.
pub const DEFAULT_TTL: u32 = 3600;

/// Class applied when a record omits it.
pub const DEFAULT_CLASS: &str = "IN";

/// Accumulator threaded through field resolution, one line at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneState {
    /// Current `$ORIGIN`, always with a trailing dot.
    pub origin: Option<String>,

    /// Resolved owner of the previous record (or the last `$ORIGIN`).
    pub current_owner_name: Option<String>,

    /// Raw `$TTL` argument, normalized when applied.
    pub default_ttl: Option<String>,
}

impl ZoneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            current_owner_name: Some(origin.clone()),
            origin: Some(origin),
            default_ttl: None,
        }
    }
}
