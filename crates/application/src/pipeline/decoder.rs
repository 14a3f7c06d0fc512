//! Per-type rdata decoding.
//!
//! [`decode`] is one exhaustive match over [`RecordType`], so a new type
//! does not compile until it has a decoder.

mod authority;
mod basic;
mod location;
mod security;
mod service;
pub mod tokens;

use tokens::RdataFields;
use zoneparse_domain::record::TextData;
use zoneparse_domain::{
    CanonicalRecord, DecodeError, RecordData, RecordError, RecordType, TypedRecord,
};

/// Decodes the record's rdata into its typed payload.
pub fn decode(record: &CanonicalRecord) -> Result<RecordData, DecodeError> {
    let record_type = record.record_type;

    let fields = RdataFields::parse(record_type, &record.rdata);

    let data = match record_type {
        RecordType::A => RecordData::A(basic::a(&fields)?),
        RecordType::AAAA => RecordData::AAAA(basic::aaaa(&fields)?),
        RecordType::CNAME => RecordData::CNAME(basic::target(&fields)?),
        RecordType::NS => RecordData::NS(basic::ns(&fields)?),
        // TXT and SPF rdata was already joined by the resolver.
        RecordType::TXT => RecordData::TXT(TextData {
            text: record.rdata.clone(),
        }),
        RecordType::MX => RecordData::MX(basic::mx(&fields)?),
        RecordType::PTR => RecordData::PTR(basic::ptr(&fields)?),
        RecordType::SOA => RecordData::SOA(authority::soa(&fields)?),
        RecordType::SRV => RecordData::SRV(service::srv(&fields)?),
        RecordType::CAA => RecordData::CAA(security::caa(&fields)?),
        RecordType::SPF => RecordData::SPF(TextData {
            text: record.rdata.clone(),
        }),
        RecordType::LOC => RecordData::LOC(location::loc(&fields)?),
        RecordType::DS => RecordData::DS(security::ds(&fields)?),
        RecordType::DNSKEY => RecordData::DNSKEY(security::dnskey(&fields)?),
        RecordType::TLSA => RecordData::TLSA(security::tlsa(&fields)?),
        RecordType::SSHFP => RecordData::SSHFP(security::sshfp(&fields)?),
        RecordType::HTTPS => RecordData::HTTPS(service::service_binding(&fields)?),
        RecordType::IPSECKEY => RecordData::IPSECKEY(security::ipseckey(&fields)?),
        RecordType::ALIAS => RecordData::ALIAS(basic::target(&fields)?),
        RecordType::NAPTR => RecordData::NAPTR(service::naptr(&fields)?),
        RecordType::CERT => RecordData::CERT(security::cert(&fields)?),
        RecordType::SMIMEA => RecordData::SMIMEA(security::smimea(&fields)?),
        RecordType::SVCB => RecordData::SVCB(service::service_binding(&fields)?),
        RecordType::URI => RecordData::URI(service::uri(&fields)?),
        RecordType::DNAME => RecordData::DNAME(basic::target(&fields)?),
        RecordType::HINFO => RecordData::HINFO(basic::hinfo(&fields)?),
        RecordType::OPENPGPKEY => RecordData::OPENPGPKEY(basic::openpgpkey(&fields)?),
        RecordType::RP => RecordData::RP(basic::rp(&fields)?),
    };

    Ok(data)
}

/// Decodes a record, attaching its position on failure.
pub fn decode_record(record: CanonicalRecord) -> Result<TypedRecord, RecordError> {
    match decode(&record) {
        Ok(data) => Ok(TypedRecord::from_canonical(record, data)),
        Err(source) => Err(RecordError {
            line: record.line,
            name: record.name,
            record_type: record.record_type,
            source,
        }),
    }
}
