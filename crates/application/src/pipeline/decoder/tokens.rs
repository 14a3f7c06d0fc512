use std::str::FromStr;
use zoneparse_domain::{Arity, DecodeError, RecordType};

/// Rdata split into fields. Whitespace separates fields except inside
/// double quotes; surrounding quotes are dropped, escapes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdataFields {
    record_type: RecordType,
    tokens: Vec<String>,
}

impl RdataFields {
    pub fn parse(record_type: RecordType, rdata: &str) -> Self {
        Self {
            record_type,
            tokens: split_quoted(rdata),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn expect(&self, arity: Arity) -> Result<&Self, DecodeError> {
        if arity.accepts(self.len()) {
            Ok(self)
        } else {
            Err(DecodeError::FieldCount {
                record_type: self.record_type,
                expected: arity,
                found: self.len(),
            })
        }
    }

    pub fn text(&self, index: usize) -> String {
        self.tokens.get(index).cloned().unwrap_or_default()
    }

    pub fn number<T: FromStr>(&self, index: usize, field: &'static str) -> Result<T, DecodeError> {
        let value = self.tokens.get(index).map(String::as_str).unwrap_or_default();
        value.parse().map_err(|_| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }

    /// Fields from `index` on, joined with single spaces.
    pub fn joined_from(&self, index: usize) -> String {
        self.tokens.get(index..).unwrap_or_default().join(" ")
    }

    /// Fields from `index` on, concatenated; used for base64/hex blobs that
    /// zone files commonly wrap across several chunks.
    pub fn concatenated_from(&self, index: usize) -> String {
        self.tokens.get(index..).unwrap_or_default().concat()
    }
}

fn split_quoted(rdata: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut in_quotes = false;
    let mut chars = rdata.chars();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '\\' => {
                    current.push(c);
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                started = true;
            }
            c if c.is_whitespace() => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            _ => {
                current.push(c);
                started = true;
            }
        }
    }

    if started {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_field_keeps_inner_spaces() {
        let fields = RdataFields::parse(RecordType::HINFO, r#""Intel x86" "Linux 6""#);
        assert_eq!(fields.as_slice(), ["Intel x86", "Linux 6"]);
    }

    #[test]
    fn test_empty_quoted_field_is_a_field() {
        let fields = RdataFields::parse(RecordType::NAPTR, r#"100 10 "" "" "" ."#);
        assert_eq!(fields.len(), 6);
        assert_eq!(fields.text(2), "");
    }

    #[test]
    fn test_number_error_carries_field_name() {
        let fields = RdataFields::parse(RecordType::MX, "ten mail.example.com.");
        assert_eq!(
            fields.number::<u16>(0, "priority"),
            Err(DecodeError::InvalidNumber {
                field: "priority",
                value: "ten".to_string(),
            })
        );
    }
}
