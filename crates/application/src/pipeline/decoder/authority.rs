use super::tokens::RdataFields;
use crate::pipeline::resolver::ttl::parse_duration;
use zoneparse_domain::record::SoaData;
use zoneparse_domain::{Arity, DecodeError};

pub fn soa(fields: &RdataFields) -> Result<SoaData, DecodeError> {
    fields.expect(Arity::Exactly(7))?;
    Ok(SoaData {
        mname: fields.text(0),
        rname: fields.text(1),
        serial: fields.number(2, "serial")?,
        refresh: timer(fields, 3, "refresh")?,
        retry: timer(fields, 4, "retry")?,
        expire: timer(fields, 5, "expire")?,
        minimum: timer(fields, 6, "minimum")?,
    })
}

/// SOA timers accept the same unit suffixes as TTLs.
fn timer(fields: &RdataFields, index: usize, field: &'static str) -> Result<u32, DecodeError> {
    let value = fields.text(index);
    parse_duration(&value).ok_or(DecodeError::InvalidNumber { field, value })
}
