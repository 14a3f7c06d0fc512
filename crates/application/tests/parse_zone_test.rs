use serde_json::json;
use zoneparse_application::{parse_zone, ParseZoneUseCase};
use zoneparse_domain::{ParseOptions, RecordData, RecordType, ZoneError};

mod helpers;
use helpers::{grouped, EXAMPLE_ZONE};

fn parse(input: &str) -> zoneparse_domain::ParsedZone {
    parse_zone(input, &ParseOptions::default()).unwrap()
}

#[test]
fn test_example_zone_summary() {
    let zone = parse(EXAMPLE_ZONE);

    assert_eq!(zone.origin.as_deref(), Some("example.com."));
    assert_eq!(zone.ttl, 3600);
    assert_eq!(zone.records.len(), 8);
    assert!(zone.errors.is_empty());
}

#[test]
fn test_example_zone_soa_spans_lines() {
    let zone = parse(EXAMPLE_ZONE);
    let soa = &grouped(&zone).get(RecordType::SOA)[0];

    assert_eq!(soa.name, "example.com.");
    let RecordData::SOA(data) = &soa.data else {
        panic!("expected SOA data");
    };
    assert_eq!(data.mname, "ns1.example.com.");
    assert_eq!(data.serial, 2024010101);
    assert_eq!(data.refresh, 7200);
    assert_eq!(data.retry, 3600);
    assert_eq!(data.expire, 1209600);
    assert_eq!(data.minimum, 86400);
}

#[test]
fn test_example_zone_inherited_owners() {
    let zone = parse(EXAMPLE_ZONE);
    let records = grouped(&zone);

    assert_eq!(records.get(RecordType::NS)[0].name, "example.com.");
    assert_eq!(records.get(RecordType::MX)[0].name, "example.com.");

    let aaaa = &records.get(RecordType::AAAA)[0];
    assert_eq!(aaaa.name, "www.example.com.");
    assert_eq!(aaaa.ttl, 3600);
}

#[test]
fn test_example_zone_comment_metadata() {
    let zone = parse(EXAMPLE_ZONE);
    let www = &grouped(&zone).get(RecordType::A)[0];

    assert_eq!(www.name, "www.example.com.");
    assert_eq!(www.ttl, 300);
    assert_eq!(www.comment.as_deref(), Some("web"));
    assert_eq!(
        www.meta.as_ref().and_then(|m| m.get("env")).map(String::as_str),
        Some("prod")
    );
}

#[test]
fn test_example_zone_cname_and_txt() {
    let zone = parse(EXAMPLE_ZONE);
    let records = grouped(&zone);

    assert_eq!(records.get(RecordType::CNAME)[0].rdata, "www.example.com.");
    let RecordData::TXT(txt) = &records.get(RecordType::TXT)[0].data else {
        panic!("expected TXT data");
    };
    assert_eq!(txt.text, "v=spf1 include:_spf.example.com -all");
}

#[test]
fn test_single_record_json() {
    let zone = parse("example.com. 3600 IN A 1.2.3.4");
    let value = serde_json::to_value(&zone).unwrap();

    assert_eq!(
        value["records"]["A"],
        json!([{
            "name": "example.com.",
            "ttl": 3600,
            "class": "IN",
            "rdata": "1.2.3.4",
            "type": "A",
            "address": "1.2.3.4"
        }])
    );
    assert_eq!(value["records"].as_object().unwrap().len(), 28);
    assert!(value.get("errors").is_none());
}

#[test]
fn test_trailing_dot_can_be_dropped() {
    let options = ParseOptions::default().without_trailing_dot();
    let zone = parse_zone(
        "$ORIGIN example.com.\nwww IN A 1.2.3.4\nftp IN CNAME www\n@ IN NS ns1.example.com.",
        &options,
    )
    .unwrap();
    let records = grouped(&zone);

    assert_eq!(records.get(RecordType::A)[0].name, "www.example.com");
    let cname = &records.get(RecordType::CNAME)[0];
    assert_eq!(cname.name, "ftp.example.com");
    assert_eq!(cname.rdata, "www.example.com");
    let RecordData::CNAME(target) = &cname.data else {
        panic!("expected CNAME data");
    };
    assert_eq!(target.target, "www.example.com");

    let ns = &records.get(RecordType::NS)[0];
    assert_eq!(ns.name, "example.com");
    assert_eq!(ns.rdata, "ns1.example.com.");
}

#[test]
fn test_empty_input() {
    let zone = parse("");

    assert_eq!(zone.origin, None);
    assert_eq!(zone.ttl, 3600);
    assert!(zone.records.is_empty());
    assert_eq!(grouped(&zone).iter().count(), 28);
}

#[test]
fn test_flatten_preserves_input_order() {
    let zone = parse_zone(EXAMPLE_ZONE, &ParseOptions::default().flattened()).unwrap();
    let flat = zone.records.as_flat().unwrap();

    let types: Vec<RecordType> = flat.iter().map(|r| r.record_type()).collect();
    assert_eq!(
        types,
        [
            RecordType::SOA,
            RecordType::NS,
            RecordType::MX,
            RecordType::A,
            RecordType::AAAA,
            RecordType::A,
            RecordType::CNAME,
            RecordType::TXT,
        ]
    );
}

#[test]
fn test_continuation_matches_single_line() {
    let single = parse(r#"txt IN TXT "part one" "part two""#);
    let multi = parse("txt IN TXT (\n    \"part one\"\n    \"part two\" )");

    assert_eq!(single.records, multi.records);
}

#[test]
fn test_quoted_semicolon_stays_in_text() {
    let zone = parse(r#"dkim IN TXT "v=DKIM1; k=rsa" ; selector key"#);
    let record = &grouped(&zone).get(RecordType::TXT)[0];

    assert_eq!(record.rdata, "v=DKIM1; k=rsa");
    assert_eq!(record.comment.as_deref(), Some("selector key"));
}

#[test]
fn test_soa_owner_becomes_origin() {
    let zone = parse("example.com. IN SOA ns1 admin 1 2 3 4 5\nwww IN A 192.0.2.1");

    assert_eq!(zone.origin.as_deref(), Some("example.com."));
    assert_eq!(grouped(&zone).get(RecordType::A)[0].name, "www.example.com.");
}

#[test]
fn test_cname_to_name_that_is_a_type_keyword() {
    let zone = parse("$ORIGIN example.com.\nwww IN CNAME ns");
    let records = grouped(&zone);

    assert!(records.get(RecordType::NS).is_empty());
    assert_eq!(records.get(RecordType::CNAME)[0].rdata, "ns.example.com.");
}

const ZONE_WITH_BAD_RECORD: &str = "a IN A 192.0.2.1\nb IN A not-an-ip\nc IN A 192.0.2.3";

#[test]
fn test_partial_mode_collects_errors() {
    let zone = parse(ZONE_WITH_BAD_RECORD);

    assert_eq!(zone.records.len(), 2);
    assert_eq!(zone.errors.len(), 1);
    assert_eq!(zone.errors[0].line, 2);
    assert_eq!(zone.errors[0].name, "b.");

    let value = serde_json::to_value(&zone).unwrap();
    assert_eq!(value["errors"][0]["source"]["kind"], "invalidAddress");
}

#[test]
fn test_strict_mode_stops_at_first_error() {
    let use_case = ParseZoneUseCase::new(ParseOptions::default().strict());
    assert!(use_case.options().strict);

    let ZoneError::Decode(error) = use_case
        .execute(ZONE_WITH_BAD_RECORD)
        .expect_err("strict mode should fail");

    assert_eq!(error.line, 2);
    assert_eq!(error.record_type, RecordType::A);
}

#[test]
fn test_unknown_types_and_directives_are_skipped() {
    let zone = parse("$INCLUDE other.zone\nwww IN RRSIG data\nwww IN A 192.0.2.1");

    assert_eq!(zone.records.len(), 1);
    assert!(zone.errors.is_empty());
}

#[test]
fn test_malformed_ttl_does_not_turn_owner_into_type() {
    let zone = parse("a -5m IN A 192.0.2.1");

    assert!(zone.errors.is_empty());
    let record = &grouped(&zone).get(RecordType::A)[0];
    assert_eq!(record.name, "a.");
    assert_eq!(record.ttl, 3600);
}
