//! Field resolution: turns sanitized lines into canonical records while
//! threading [`ZoneState`] from one line to the next.

pub mod comment;
pub mod fields;
pub mod names;
pub mod ttl;
pub mod type_scan;

use tracing::debug;
use zoneparse_domain::{
    CanonicalRecord, ParseOptions, RecordType, SanitizedLine, ZoneState, DEFAULT_CLASS,
};

use comment::extract_metadata;
use fields::split_leading_fields;
use type_scan::locate_type;

/// What a single line contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// `$ORIGIN` / `$TTL` applied to the state.
    Directive,
    Record(CanonicalRecord),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No known type keyword on the line.
    UnknownType,
    /// A directive other than `$ORIGIN` / `$TTL`, or one without argument.
    IgnoredDirective,
}

/// Canonical records of a whole zone plus the final zone-level values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedZone {
    pub records: Vec<CanonicalRecord>,
    pub origin: Option<String>,
    pub ttl: u32,
}

/// Resolves every line, folding the zone state left to right.
pub fn resolve<I>(lines: I, options: &ParseOptions) -> ResolvedZone
where
    I: IntoIterator<Item = SanitizedLine>,
{
    let mut records = Vec::new();
    let state = lines
        .into_iter()
        .fold(ZoneState::new(), |state, line| {
            let (state, outcome) = resolve_line(state, &line, options);
            if let LineOutcome::Record(record) = outcome {
                records.push(record);
            }
            state
        });

    ResolvedZone {
        records,
        ttl: ttl::zone_ttl(&state),
        origin: state.origin,
    }
}

/// One fold step: consumes the state and hands back its successor.
pub fn resolve_line(
    state: ZoneState,
    line: &SanitizedLine,
    options: &ParseOptions,
) -> (ZoneState, LineOutcome) {
    if line.is_directive() {
        return apply_directive(state, line);
    }

    let Some(token) = locate_type(&line.text) else {
        debug!(line = line.line, text = %line.text, "No record type found, skipping line");
        return (state, LineOutcome::Skipped(SkipReason::UnknownType));
    };

    let record_type = token.record_type;
    let leading = split_leading_fields(&line.text[..token.start]);
    let raw_rdata = line.text[token.end..].trim();

    let mut state = state;
    let raw_owner = leading
        .owner
        .map(str::to_string)
        .or_else(|| state.current_owner_name.clone())
        .unwrap_or_else(|| names::APEX.to_string());

    if record_type == RecordType::SOA && state.origin.is_none() && raw_owner != names::APEX {
        let origin = names::normalize_origin(names::strip_trailing_dot(&raw_owner));
        debug!(line = line.line, origin = %origin, "Zone origin taken from SOA owner");
        state.origin = Some(origin);
    }

    let name = if record_type == RecordType::SOA {
        names::absolute_soa_owner(&raw_owner, state.origin.as_deref())
    } else {
        names::absolute_name(&raw_owner, state.origin.as_deref())
    }
    .to_lowercase();
    state.current_owner_name = Some(name.clone());

    let ttl = ttl::normalize_ttl(leading.ttl.or(state.default_ttl.as_deref()));
    let class = leading.class.unwrap_or(DEFAULT_CLASS).to_ascii_uppercase();
    let rdata = normalize_rdata(record_type, raw_rdata, state.origin.as_deref(), options);
    let parts = extract_metadata(&line.trailing_comment);

    let record = CanonicalRecord {
        name,
        record_type,
        ttl,
        class,
        rdata,
        comment: parts.comment,
        metadata: parts.metadata,
        line: line.line,
    };

    (state, LineOutcome::Record(record))
}

fn apply_directive(mut state: ZoneState, line: &SanitizedLine) -> (ZoneState, LineOutcome) {
    let mut parts = line.text.split_whitespace();
    let keyword = parts.next().unwrap_or_default().to_ascii_uppercase();
    let argument = parts.next();

    match (keyword.as_str(), argument) {
        ("$ORIGIN", Some(origin)) => {
            let origin = names::normalize_origin(origin);
            debug!(line = line.line, origin = %origin, "Applying $ORIGIN");
            state.current_owner_name = Some(origin.clone());
            state.origin = Some(origin);
            (state, LineOutcome::Directive)
        }
        ("$TTL", Some(ttl)) => {
            debug!(line = line.line, ttl = %ttl, "Applying $TTL");
            state.default_ttl = Some(ttl.to_ascii_lowercase());
            (state, LineOutcome::Directive)
        }
        _ => {
            debug!(line = line.line, directive = %keyword, "Ignoring directive");
            (state, LineOutcome::Skipped(SkipReason::IgnoredDirective))
        }
    }
}

fn normalize_rdata(
    record_type: RecordType,
    raw: &str,
    origin: Option<&str>,
    options: &ParseOptions,
) -> String {
    if record_type.is_text() {
        let segments = quoted_segments(raw);
        if segments.is_empty() {
            return collapse_whitespace(raw);
        }
        let separator = if options.preserve_spacing { " " } else { "" };
        return segments.join(separator);
    }

    let rdata = collapse_whitespace(raw);
    if record_type == RecordType::CNAME && !rdata.is_empty() {
        return names::absolute_name(&rdata, origin);
    }
    rdata
}

pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Contents of every complete `"..."` span, escapes copied literally.
pub fn quoted_segments(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut segments = Vec::new();
    let mut i = 0;

    while let Some(offset) = raw[i..].find('"') {
        let start = i + offset + 1;
        let mut j = start;
        let mut closed = false;

        while j < bytes.len() {
            match bytes[j] {
                b'\\' => j += 2,
                b'"' => {
                    closed = true;
                    break;
                }
                _ => j += 1,
            }
        }

        if !closed {
            break;
        }
        segments.push(&raw[start..j]);
        i = j + 1;
    }

    segments
}
