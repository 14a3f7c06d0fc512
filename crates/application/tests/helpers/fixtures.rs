#![allow(dead_code)]
use zoneparse_domain::{CanonicalRecord, ParsedZone, RecordType, RecordsByType, SanitizedLine};

/// Small zone touching directives, continuations, owner inheritance,
/// comments with tags and quoted TXT segments.
pub const EXAMPLE_ZONE: &str = r#"; example.com zone
$ORIGIN example.com.
$TTL 3600

@   IN  SOA ns1.example.com. admin.example.com. (
        2024010101 ; serial
        7200       ; refresh
        3600       ; retry
        1209600    ; expire
        86400 )    ; minimum
    IN  NS  ns1.example.com.
    IN  MX  10 mail.example.com.

www 300 IN  A   192.0.2.10 ; web cf_tags=env:prod
    IN  AAAA    2001:db8::10
mail    IN  A   192.0.2.20
ftp IN  CNAME   www
txt IN  TXT "v=spf1 include:_spf.example.com" "-all"
"#;

pub fn canonical(record_type: RecordType, rdata: &str) -> CanonicalRecord {
    CanonicalRecord {
        name: "example.com.".to_string(),
        record_type,
        ttl: 3600,
        class: "IN".to_string(),
        rdata: rdata.to_string(),
        comment: None,
        metadata: None,
        line: 1,
    }
}

pub fn logical_line(text: &str) -> SanitizedLine {
    SanitizedLine::new(text, "", 1)
}

pub fn grouped(zone: &ParsedZone) -> &RecordsByType {
    zone.records
        .as_grouped()
        .expect("zone parsed without flatten should be grouped")
}
