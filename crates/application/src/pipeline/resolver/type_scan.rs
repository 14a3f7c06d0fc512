//! Locates the record type keyword on a record line.
//!
//! Quoted spans are masked first so TXT content can never be taken for a
//! type. Among the remaining keyword tokens the rightmost one whose leading
//! tokens still read as owner/TTL/class wins; this keeps owners named like a
//! type (`ns IN A ...`) and targets named like a type (`www CNAME ns`) both
//! resolving correctly.

use super::fields::is_class;
use crate::pipeline::sanitizer::QuoteState;
use std::str::FromStr;
use zoneparse_domain::RecordType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeToken {
    pub record_type: RecordType,
    /// Byte offset of the keyword in the line.
    pub start: usize,
    /// Byte offset just past the keyword.
    pub end: usize,
}

pub fn locate_type(line: &str) -> Option<TypeToken> {
    let masked = mask_quoted(line);
    let tokens = tokens_with_offsets(&masked);
    let owner_in_column_zero = !line.starts_with(char::is_whitespace);

    let candidates: Vec<(usize, TypeToken)> = tokens
        .iter()
        .enumerate()
        .filter_map(|(position, (start, token))| {
            let record_type = RecordType::from_str(token).ok()?;
            Some((
                position,
                TypeToken {
                    record_type,
                    start: *start,
                    end: start + token.len(),
                },
            ))
        })
        .collect();

    candidates
        .iter()
        .rev()
        .find(|(position, _)| {
            let prefix = tokens[..*position].iter().map(|(_, token)| *token);
            is_well_formed_prefix(prefix, owner_in_column_zero)
        })
        .or_else(|| {
            candidates
                .iter()
                .rev()
                .find(|(position, _)| *position <= MAX_LEADING_FIELDS)
        })
        .or_else(|| candidates.last())
        .map(|(_, token)| *token)
}

/// Owner, TTL and class.
const MAX_LEADING_FIELDS: usize = 3;

/// At most three tokens; everything but a column-zero owner must look like
/// a class or a TTL. A line starting in column zero always has an owner, so
/// its first token is never the type.
fn is_well_formed_prefix<'a>(
    tokens: impl ExactSizeIterator<Item = &'a str>,
    owner_in_column_zero: bool,
) -> bool {
    let count = tokens.len();
    if count > MAX_LEADING_FIELDS || (count == 0 && owner_in_column_zero) {
        return false;
    }

    tokens.enumerate().all(|(i, token)| {
        (i == 0 && owner_in_column_zero)
            || is_class(token)
            || token.starts_with(|c: char| c.is_ascii_digit())
    })
}

/// Replaces every byte of each quoted span, quotes included, with `#` so
/// byte offsets stay aligned with the original line.
fn mask_quoted(line: &str) -> String {
    let mut masked = String::with_capacity(line.len());
    let mut quotes = QuoteState::default();

    for c in line.chars() {
        if quotes.quoted(c) {
            masked.extend(std::iter::repeat('#').take(c.len_utf8()));
        } else {
            masked.push(c);
        }
    }

    masked
}

fn tokens_with_offsets(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push((s, &line[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((s, &line[s..]));
    }

    tokens
}
