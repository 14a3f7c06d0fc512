use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types understood by the zone parser.
///
/// The declaration order is the canonical key order of grouped output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    NS,
    TXT,
    MX,
    PTR,
    SOA,
    SRV,
    CAA,
    SPF,
    LOC,
    DS,
    DNSKEY,
    TLSA,
    SSHFP,
    HTTPS,
    IPSECKEY,
    ALIAS,
    NAPTR,
    CERT,
    SMIMEA,
    SVCB,
    URI,
    DNAME,
    HINFO,
    OPENPGPKEY,
    RP,
}

impl RecordType {
    pub const COUNT: usize = 28;

    pub const ALL: [RecordType; RecordType::COUNT] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::NS,
        RecordType::TXT,
        RecordType::MX,
        RecordType::PTR,
        RecordType::SOA,
        RecordType::SRV,
        RecordType::CAA,
        RecordType::SPF,
        RecordType::LOC,
        RecordType::DS,
        RecordType::DNSKEY,
        RecordType::TLSA,
        RecordType::SSHFP,
        RecordType::HTTPS,
        RecordType::IPSECKEY,
        RecordType::ALIAS,
        RecordType::NAPTR,
        RecordType::CERT,
        RecordType::SMIMEA,
        RecordType::SVCB,
        RecordType::URI,
        RecordType::DNAME,
        RecordType::HINFO,
        RecordType::OPENPGPKEY,
        RecordType::RP,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::NS => "NS",
            RecordType::TXT => "TXT",
            RecordType::MX => "MX",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
            RecordType::CAA => "CAA",
            RecordType::SPF => "SPF",
            RecordType::LOC => "LOC",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
            RecordType::HTTPS => "HTTPS",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::ALIAS => "ALIAS",
            RecordType::NAPTR => "NAPTR",
            RecordType::CERT => "CERT",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::SVCB => "SVCB",
            RecordType::URI => "URI",
            RecordType::DNAME => "DNAME",
            RecordType::HINFO => "HINFO",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::RP => "RP",
        }
    }

    /// Dense position of this type in [`RecordType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Types whose rdata is a sequence of quoted character-strings joined
    /// into a single text value.
    pub fn is_text(&self) -> bool {
        matches!(self, RecordType::TXT | RecordType::SPF)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "NS" => Ok(RecordType::NS),
            "TXT" => Ok(RecordType::TXT),
            "MX" => Ok(RecordType::MX),
            "PTR" => Ok(RecordType::PTR),
            "SOA" => Ok(RecordType::SOA),
            "SRV" => Ok(RecordType::SRV),
            "CAA" => Ok(RecordType::CAA),
            "SPF" => Ok(RecordType::SPF),
            "LOC" => Ok(RecordType::LOC),
            "DS" => Ok(RecordType::DS),
            "DNSKEY" => Ok(RecordType::DNSKEY),
            "TLSA" => Ok(RecordType::TLSA),
            "SSHFP" => Ok(RecordType::SSHFP),
            "HTTPS" => Ok(RecordType::HTTPS),
            "IPSECKEY" => Ok(RecordType::IPSECKEY),
            "ALIAS" => Ok(RecordType::ALIAS),
            "NAPTR" => Ok(RecordType::NAPTR),
            "CERT" => Ok(RecordType::CERT),
            "SMIMEA" => Ok(RecordType::SMIMEA),
            "SVCB" => Ok(RecordType::SVCB),
            "URI" => Ok(RecordType::URI),
            "DNAME" => Ok(RecordType::DNAME),
            "HINFO" => Ok(RecordType::HINFO),
            "OPENPGPKEY" => Ok(RecordType::OPENPGPKEY),
            "RP" => Ok(RecordType::RP),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}
