use super::tokens::RdataFields;
use zoneparse_domain::record::{
    CaaData, CertData, DnskeyData, DsData, IpseckeyData, SmimeaData, SshfpData, TlsaData,
};
use zoneparse_domain::{Arity, DecodeError};

pub fn caa(fields: &RdataFields) -> Result<CaaData, DecodeError> {
    fields.expect(Arity::AtLeast(3))?;
    Ok(CaaData {
        flag: fields.number(0, "flag")?,
        tag: fields.text(1),
        value: fields.joined_from(2),
    })
}

pub fn ds(fields: &RdataFields) -> Result<DsData, DecodeError> {
    fields.expect(Arity::AtLeast(4))?;
    Ok(DsData {
        key_tag: fields.number(0, "key tag")?,
        algorithm: fields.number(1, "algorithm")?,
        digest_type: fields.number(2, "digest type")?,
        digest: fields.concatenated_from(3),
    })
}

pub fn dnskey(fields: &RdataFields) -> Result<DnskeyData, DecodeError> {
    fields.expect(Arity::AtLeast(4))?;
    Ok(DnskeyData {
        flags: fields.number(0, "flags")?,
        protocol: fields.number(1, "protocol")?,
        algorithm: fields.number(2, "algorithm")?,
        public_key: fields.concatenated_from(3),
    })
}

pub fn tlsa(fields: &RdataFields) -> Result<TlsaData, DecodeError> {
    fields.expect(Arity::AtLeast(4))?;
    Ok(TlsaData {
        usage: fields.number(0, "usage")?,
        selector: fields.number(1, "selector")?,
        matching_type: fields.number(2, "matching type")?,
        certificate_association_data: fields.concatenated_from(3),
    })
}

pub fn smimea(fields: &RdataFields) -> Result<SmimeaData, DecodeError> {
    fields.expect(Arity::AtLeast(4))?;
    Ok(SmimeaData {
        usage: fields.number(0, "usage")?,
        selector: fields.number(1, "selector")?,
        matching_type: fields.number(2, "matching type")?,
        cert_association_data: fields.concatenated_from(3),
    })
}

pub fn sshfp(fields: &RdataFields) -> Result<SshfpData, DecodeError> {
    fields.expect(Arity::AtLeast(3))?;
    Ok(SshfpData {
        algorithm: fields.number(0, "algorithm")?,
        fingerprint_type: fields.number(1, "fingerprint type")?,
        fingerprint: fields.concatenated_from(2),
    })
}

pub fn ipseckey(fields: &RdataFields) -> Result<IpseckeyData, DecodeError> {
    fields.expect(Arity::AtLeast(4))?;
    Ok(IpseckeyData {
        precedence: fields.number(0, "precedence")?,
        gateway_type: fields.number(1, "gateway type")?,
        algorithm: fields.number(2, "algorithm")?,
        gateway: fields.text(3),
        public_key: fields.concatenated_from(4),
    })
}

pub fn cert(fields: &RdataFields) -> Result<CertData, DecodeError> {
    fields.expect(Arity::AtLeast(4))?;
    Ok(CertData {
        cert_type: cert_type(fields)?,
        key_tag: fields.number(1, "key tag")?,
        algorithm: fields.number(2, "algorithm")?,
        certificate: fields.concatenated_from(3),
    })
}

/// Certificate type, numeric or as an RFC 4398 mnemonic.
fn cert_type(fields: &RdataFields) -> Result<u16, DecodeError> {
    let value = fields.text(0);
    let mnemonic = match value.to_ascii_uppercase().as_str() {
        "PKIX" => Some(1),
        "SPKI" => Some(2),
        "PGP" => Some(3),
        "IPKIX" => Some(4),
        "ISPKI" => Some(5),
        "IPGP" => Some(6),
        "ACPKIX" => Some(7),
        "IACPKIX" => Some(8),
        "URI" => Some(253),
        "OID" => Some(254),
        _ => None,
    };

    match mnemonic {
        Some(code) => Ok(code),
        None => fields.number(0, "certificate type"),
    }
}
