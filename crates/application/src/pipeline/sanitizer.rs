//! Splits zone text into logical lines.
//!
//! Comments are cut at the first `;` outside a double-quoted string and
//! parenthesised records spanning several physical lines are joined into one.

use std::iter::Enumerate;
use std::str::Lines;
use tracing::debug;
use zoneparse_domain::SanitizedLine;

pub const COMMENT_MARKER: char = ';';

/// Streaming sanitizer; yields one [`SanitizedLine`] per record or directive.
pub struct Sanitizer<'a> {
    lines: Enumerate<Lines<'a>>,
    pending: Option<Continuation>,
}

struct Continuation {
    start_line: usize,
    text: String,
    depth: usize,
}

impl<'a> Sanitizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            pending: None,
        }
    }
}

impl Iterator for Sanitizer<'_> {
    type Item = SanitizedLine;

    fn next(&mut self) -> Option<SanitizedLine> {
        loop {
            let Some((index, raw)) = self.lines.next() else {
                if let Some(open) = self.pending.take() {
                    debug!(line = open.start_line, "Dropping record with unclosed parenthesis");
                }
                return None;
            };
            let line_no = index + 1;

            if raw.trim().is_empty() || raw.starts_with(COMMENT_MARKER) {
                continue;
            }

            let (record, comment) = split_comment(raw);
            let scan = strip_parens(record);

            match self.pending.take() {
                Some(mut open) => {
                    let segment = scan.text.trim();
                    if !segment.is_empty() {
                        open.text.push(' ');
                        open.text.push_str(segment);
                    }
                    open.depth = (open.depth + scan.opens).saturating_sub(scan.closes);

                    if open.depth == 0 {
                        return Some(finish(&open.text, comment, open.start_line));
                    }
                    self.pending = Some(open);
                }
                None if scan.opens > scan.closes => {
                    self.pending = Some(Continuation {
                        start_line: line_no,
                        text: scan.text.trim_end().to_string(),
                        depth: scan.opens - scan.closes,
                    });
                }
                None => {
                    if scan.text.trim().is_empty() {
                        continue;
                    }
                    return Some(finish(&scan.text, comment, line_no));
                }
            }
        }
    }
}

/// Collects every logical line of `input`.
pub fn sanitize(input: &str) -> Vec<SanitizedLine> {
    Sanitizer::new(input).collect()
}

/// Splits a physical line at its first unquoted comment marker.
///
/// Inside quotes a backslash escapes the next character, so `\"` does not
/// close the string and `\\"` does.
pub fn split_comment(line: &str) -> (&str, &str) {
    let mut quotes = QuoteState::default();

    for (i, c) in line.char_indices() {
        if !quotes.quoted(c) && c == COMMENT_MARKER {
            return (&line[..i], line[i + 1..].trim());
        }
    }

    (line, "")
}

/// Tracks double-quoted spans one character at a time.
#[derive(Debug, Default)]
pub(crate) struct QuoteState {
    in_quotes: bool,
    escaped: bool,
}

impl QuoteState {
    /// Whether `c` belongs to a quoted span, delimiting quotes included.
    pub(crate) fn quoted(&mut self, c: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return true;
        }

        match c {
            '"' => {
                self.in_quotes = !self.in_quotes;
                true
            }
            '\\' if self.in_quotes => {
                self.escaped = true;
                true
            }
            _ => self.in_quotes,
        }
    }
}

struct ParenScan {
    text: String,
    opens: usize,
    closes: usize,
}

fn strip_parens(record: &str) -> ParenScan {
    let mut text = String::with_capacity(record.len());
    let mut opens = 0;
    let mut closes = 0;
    let mut quotes = QuoteState::default();

    for c in record.chars() {
        match c {
            _ if quotes.quoted(c) => text.push(c),
            '(' => opens += 1,
            ')' => closes += 1,
            _ => text.push(c),
        }
    }

    ParenScan {
        text,
        opens,
        closes,
    }
}

fn finish(text: &str, comment: &str, line: usize) -> SanitizedLine {
    SanitizedLine::new(text.replace('\t', " "), comment, line)
}
