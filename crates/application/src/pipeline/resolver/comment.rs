//! Structured metadata carried in record comments.
//!
//! `; web frontend cf_tags=env:prod,team:infra` yields the comment
//! `web frontend` and the metadata `{env: prod, team: infra}`.

use zoneparse_domain::Metadata;

pub const TAGS_PREFIX: &str = "cf_tags=";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentParts {
    pub comment: Option<String>,
    pub metadata: Option<Metadata>,
}

pub fn extract_metadata(raw: &str) -> CommentParts {
    let comment = raw.trim();
    if comment.is_empty() {
        return CommentParts::default();
    }

    // ASCII lowercasing keeps byte offsets aligned with `comment`.
    let lowered = comment.to_ascii_lowercase();
    let Some(start) = lowered.find(TAGS_PREFIX) else {
        return verbatim(comment);
    };

    let payload_start = start + TAGS_PREFIX.len();
    let payload_end = comment[payload_start..]
        .find(char::is_whitespace)
        .map_or(comment.len(), |offset| payload_start + offset);
    let payload = &comment[payload_start..payload_end];
    if payload.is_empty() {
        return verbatim(comment);
    }

    let metadata = parse_tags(payload);
    let remainder = format!("{} {}", &comment[..start], &comment[payload_end..]);
    let cleaned = remainder.split_whitespace().collect::<Vec<_>>().join(" ");

    CommentParts {
        comment: (!cleaned.is_empty()).then_some(cleaned),
        metadata: (!metadata.is_empty()).then_some(metadata),
    }
}

/// Parses `key:value,key:value`. Pairs missing either side are skipped;
/// anything after a second `:` is ignored.
fn parse_tags(payload: &str) -> Metadata {
    let mut metadata = Metadata::new();

    for pair in payload.split(',') {
        let mut parts = pair.split(':');
        let key = parts.next().map(str::trim).unwrap_or_default();
        let value = parts.next().map(str::trim).unwrap_or_default();

        if !key.is_empty() && !value.is_empty() {
            metadata.insert(key.to_lowercase(), value.to_lowercase());
        }
    }

    metadata
}

fn verbatim(comment: &str) -> CommentParts {
    CommentParts {
        comment: Some(comment.to_string()),
        metadata: None,
    }
}
