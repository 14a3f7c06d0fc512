use super::tokens::RdataFields;
use zoneparse_domain::record::{
    AData, AaaaData, HinfoData, MxData, NsData, OpenpgpkeyData, PtrData, RpData, TargetData,
};
use zoneparse_domain::{Arity, DecodeError};

pub fn a(fields: &RdataFields) -> Result<AData, DecodeError> {
    fields.expect(Arity::Exactly(1))?;
    Ok(AData {
        address: address(fields)?,
    })
}

pub fn aaaa(fields: &RdataFields) -> Result<AaaaData, DecodeError> {
    fields.expect(Arity::Exactly(1))?;
    Ok(AaaaData {
        address: address(fields)?,
    })
}

fn address<T: std::str::FromStr>(fields: &RdataFields) -> Result<T, DecodeError> {
    let value = fields.text(0);
    value
        .parse()
        .map_err(|_| DecodeError::InvalidAddress { value })
}

pub fn target(fields: &RdataFields) -> Result<TargetData, DecodeError> {
    fields.expect(Arity::Exactly(1))?;
    Ok(TargetData {
        target: fields.text(0),
    })
}

pub fn ns(fields: &RdataFields) -> Result<NsData, DecodeError> {
    fields.expect(Arity::Exactly(1))?;
    Ok(NsData {
        host: fields.text(0),
    })
}

pub fn ptr(fields: &RdataFields) -> Result<PtrData, DecodeError> {
    fields.expect(Arity::Exactly(1))?;
    Ok(PtrData {
        ptrdname: fields.text(0),
    })
}

pub fn mx(fields: &RdataFields) -> Result<MxData, DecodeError> {
    fields.expect(Arity::Exactly(2))?;
    Ok(MxData {
        priority: fields.number(0, "priority")?,
        exchange: fields.text(1),
    })
}

pub fn hinfo(fields: &RdataFields) -> Result<HinfoData, DecodeError> {
    fields.expect(Arity::Exactly(2))?;
    Ok(HinfoData {
        cpu: fields.text(0),
        os: fields.text(1),
    })
}

pub fn rp(fields: &RdataFields) -> Result<RpData, DecodeError> {
    fields.expect(Arity::Exactly(2))?;
    Ok(RpData {
        mailbox: fields.text(0),
        txt_domain: fields.text(1),
    })
}

pub fn openpgpkey(fields: &RdataFields) -> Result<OpenpgpkeyData, DecodeError> {
    fields.expect(Arity::AtLeast(1))?;
    Ok(OpenpgpkeyData {
        public_key: fields.concatenated_from(0),
    })
}
