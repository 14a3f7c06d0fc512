use serde_json::json;
use std::net::Ipv4Addr;
use zoneparse_domain::record::{Dms, Hemisphere, LocData, ServiceBindingData, SoaData};
use zoneparse_domain::{CanonicalRecord, RecordData, RecordType, TypedRecord};

mod helpers;
use helpers::TypedRecordBuilder;

#[test]
fn test_record_type_follows_data() {
    let record = TypedRecordBuilder::new().mx(10, "mail.example.com.").build();
    assert_eq!(record.record_type(), RecordType::MX);
}

#[test]
fn test_a_record_json_shape() {
    let record = TypedRecordBuilder::new().a("1.2.3.4").build();

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "example.com.",
            "ttl": 3600,
            "class": "IN",
            "rdata": "1.2.3.4",
            "type": "A",
            "address": "1.2.3.4"
        })
    );
}

#[test]
fn test_comment_and_meta_serialized_when_present() {
    let record = TypedRecordBuilder::new()
        .comment("frontend")
        .meta("env", "prod")
        .build();

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["comment"], "frontend");
    assert_eq!(value["meta"], json!({"env": "prod"}));
}

#[test]
fn test_multi_word_fields_are_camel_case() {
    let record = TypedRecord {
        name: "example.com.".to_string(),
        ttl: 300,
        class: "IN".to_string(),
        rdata: String::new(),
        comment: None,
        meta: None,
        data: RecordData::LOC(LocData {
            latitude: Dms {
                degrees: 52,
                minutes: 22,
                seconds: 23.0,
                hemisphere: Hemisphere::N,
            },
            longitude: Dms {
                degrees: 4,
                minutes: 53,
                seconds: 32.0,
                hemisphere: Hemisphere::E,
            },
            altitude: -2.0,
            size: 0.0,
            horiz_precision: 0.0,
            vert_precision: 0.0,
        }),
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["type"], "LOC");
    assert_eq!(value["latitude"]["hemisphere"], "N");
    assert!(value.get("horizPrecision").is_some());
    assert!(value.get("vertPrecision").is_some());
}

#[test]
fn test_from_canonical_keeps_common_fields() {
    let canonical = CanonicalRecord {
        name: "example.com.".to_string(),
        record_type: RecordType::SOA,
        ttl: 86400,
        class: "IN".to_string(),
        rdata: "ns1.example.com. admin.example.com. 1 2 3 4 5".to_string(),
        comment: Some("apex".to_string()),
        metadata: None,
        line: 3,
    };
    let data = RecordData::SOA(SoaData {
        mname: "ns1.example.com.".to_string(),
        rname: "admin.example.com.".to_string(),
        serial: 1,
        refresh: 2,
        retry: 3,
        expire: 4,
        minimum: 5,
    });

    let typed = TypedRecord::from_canonical(canonical, data);
    assert_eq!(typed.name, "example.com.");
    assert_eq!(typed.ttl, 86400);
    assert_eq!(typed.comment.as_deref(), Some("apex"));
    assert_eq!(typed.record_type(), RecordType::SOA);
}

#[test]
fn test_dms_to_decimal_degrees_signs_by_hemisphere() {
    let south = Dms {
        degrees: 33,
        minutes: 30,
        seconds: 0.0,
        hemisphere: Hemisphere::S,
    };
    assert!((south.to_decimal_degrees() + 33.5).abs() < 1e-9);
}

#[test]
fn test_service_binding_alias_mode() {
    let alias = ServiceBindingData {
        priority: 0,
        target: "svc.example.com.".to_string(),
        params: String::new(),
    };
    assert!(alias.is_alias_mode());
}

#[test]
fn test_address_type_is_ipv4() {
    let record = TypedRecordBuilder::new().a("10.0.0.1").build();
    match record.data {
        RecordData::A(a) => assert_eq!(a.address, Ipv4Addr::new(10, 0, 0, 1)),
        other => panic!("unexpected data {:?}", other),
    }
}
