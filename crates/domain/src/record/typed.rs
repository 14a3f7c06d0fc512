use super::basic::{
    AData, AaaaData, HinfoData, MxData, NsData, OpenpgpkeyData, PtrData, RpData, TargetData,
    TextData,
};
use super::canonical::{CanonicalRecord, Metadata};
use super::location::LocData;
use super::security::{
    CaaData, CertData, DnskeyData, DsData, IpseckeyData, SmimeaData, SshfpData, TlsaData,
};
use super::service::{NaptrData, ServiceBindingData, SrvData, UriData};
use super::soa::SoaData;
use super::RecordType;
use serde::{Deserialize, Serialize};

/// Decoded payload, one variant per [`RecordType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecordData {
    A(AData),
    AAAA(AaaaData),
    CNAME(TargetData),
    NS(NsData),
    TXT(TextData),
    MX(MxData),
    PTR(PtrData),
    SOA(SoaData),
    SRV(SrvData),
    CAA(CaaData),
    SPF(TextData),
    LOC(LocData),
    DS(DsData),
    DNSKEY(DnskeyData),
    TLSA(TlsaData),
    SSHFP(SshfpData),
    HTTPS(ServiceBindingData),
    IPSECKEY(IpseckeyData),
    ALIAS(TargetData),
    NAPTR(NaptrData),
    CERT(CertData),
    SMIMEA(SmimeaData),
    SVCB(ServiceBindingData),
    URI(UriData),
    DNAME(TargetData),
    HINFO(HinfoData),
    OPENPGPKEY(OpenpgpkeyData),
    RP(RpData),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::NS(_) => RecordType::NS,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::MX(_) => RecordType::MX,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::SOA(_) => RecordType::SOA,
            RecordData::SRV(_) => RecordType::SRV,
            RecordData::CAA(_) => RecordType::CAA,
            RecordData::SPF(_) => RecordType::SPF,
            RecordData::LOC(_) => RecordType::LOC,
            RecordData::DS(_) => RecordType::DS,
            RecordData::DNSKEY(_) => RecordType::DNSKEY,
            RecordData::TLSA(_) => RecordType::TLSA,
            RecordData::SSHFP(_) => RecordType::SSHFP,
            RecordData::HTTPS(_) => RecordType::HTTPS,
            RecordData::IPSECKEY(_) => RecordType::IPSECKEY,
            RecordData::ALIAS(_) => RecordType::ALIAS,
            RecordData::NAPTR(_) => RecordType::NAPTR,
            RecordData::CERT(_) => RecordType::CERT,
            RecordData::SMIMEA(_) => RecordType::SMIMEA,
            RecordData::SVCB(_) => RecordType::SVCB,
            RecordData::URI(_) => RecordType::URI,
            RecordData::DNAME(_) => RecordType::DNAME,
            RecordData::HINFO(_) => RecordType::HINFO,
            RecordData::OPENPGPKEY(_) => RecordType::OPENPGPKEY,
            RecordData::RP(_) => RecordType::RP,
        }
    }
}

/// A fully decoded record: the common fields plus its typed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedRecord {
    pub name: String,

    pub ttl: u32,

    pub class: String,

    pub rdata: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,

    #[serde(flatten)]
    pub data: RecordData,
}

impl TypedRecord {
    pub fn from_canonical(record: CanonicalRecord, data: RecordData) -> Self {
        Self {
            name: record.name,
            ttl: record.ttl,
            class: record.class,
            rdata: record.rdata,
            comment: record.comment,
            meta: record.metadata,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
