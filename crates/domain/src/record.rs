pub mod basic;
pub mod canonical;
pub mod location;
pub mod record_type;
pub mod security;
pub mod service;
pub mod soa;
pub mod typed;

pub use basic::{
    AData, AaaaData, HinfoData, MxData, NsData, OpenpgpkeyData, PtrData, RpData, TargetData,
    TextData,
};
pub use canonical::{CanonicalRecord, Metadata};
pub use location::{Dms, Hemisphere, LocData};
pub use record_type::RecordType;
pub use security::{
    CaaData, CertData, DnskeyData, DsData, IpseckeyData, SmimeaData, SshfpData, TlsaData,
};
pub use service::{NaptrData, ServiceBindingData, SrvData, UriData};
pub use soa::SoaData;
pub use typed::{RecordData, TypedRecord};
