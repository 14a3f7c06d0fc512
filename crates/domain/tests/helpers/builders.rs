#![allow(dead_code)]
use std::net::Ipv4Addr;
use zoneparse_domain::record::{AData, MxData, TextData};
use zoneparse_domain::{Metadata, RecordData, TypedRecord};

pub struct TypedRecordBuilder {
    name: String,
    ttl: u32,
    class: String,
    rdata: String,
    comment: Option<String>,
    meta: Option<Metadata>,
    data: RecordData,
}

impl TypedRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            ttl: 3600,
            class: "IN".to_string(),
            rdata: "192.0.2.1".to_string(),
            comment: None,
            meta: None,
            data: RecordData::A(AData {
                address: Ipv4Addr::new(192, 0, 2, 1),
            }),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn meta(mut self, key: &str, value: &str) -> Self {
        self.meta
            .get_or_insert_with(Metadata::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn a(mut self, address: &str) -> Self {
        self.rdata = address.to_string();
        self.data = RecordData::A(AData {
            address: address.parse().unwrap(),
        });
        self
    }

    pub fn mx(mut self, priority: u16, exchange: &str) -> Self {
        self.rdata = format!("{} {}", priority, exchange);
        self.data = RecordData::MX(MxData {
            priority,
            exchange: exchange.to_string(),
        });
        self
    }

    pub fn txt(mut self, text: &str) -> Self {
        self.rdata = text.to_string();
        self.data = RecordData::TXT(TextData {
            text: text.to_string(),
        });
        self
    }

    pub fn build(self) -> TypedRecord {
        TypedRecord {
            name: self.name,
            ttl: self.ttl,
            class: self.class,
            rdata: self.rdata,
            comment: self.comment,
            meta: self.meta,
            data: self.data,
        }
    }
}
