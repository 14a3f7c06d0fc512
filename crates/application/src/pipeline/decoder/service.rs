use super::tokens::RdataFields;
use zoneparse_domain::record::{NaptrData, ServiceBindingData, SrvData, UriData};
use zoneparse_domain::{Arity, DecodeError};

pub fn srv(fields: &RdataFields) -> Result<SrvData, DecodeError> {
    fields.expect(Arity::Exactly(4))?;
    Ok(SrvData {
        priority: fields.number(0, "priority")?,
        weight: fields.number(1, "weight")?,
        port: fields.number(2, "port")?,
        target: fields.text(3),
    })
}

pub fn uri(fields: &RdataFields) -> Result<UriData, DecodeError> {
    fields.expect(Arity::Exactly(3))?;
    Ok(UriData {
        priority: fields.number(0, "priority")?,
        weight: fields.number(1, "weight")?,
        target: fields.text(2),
    })
}

pub fn naptr(fields: &RdataFields) -> Result<NaptrData, DecodeError> {
    fields.expect(Arity::Exactly(6))?;
    Ok(NaptrData {
        order: fields.number(0, "order")?,
        preference: fields.number(1, "preference")?,
        flags: fields.text(2),
        service: fields.text(3),
        regexp: fields.text(4),
        replacement: fields.text(5),
    })
}

/// SVCB and HTTPS share one layout.
pub fn service_binding(fields: &RdataFields) -> Result<ServiceBindingData, DecodeError> {
    fields.expect(Arity::AtLeast(2))?;
    Ok(ServiceBindingData {
        priority: fields.number(0, "priority")?,
        target: fields.text(1),
        params: fields.joined_from(2),
    })
}
