use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvData {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriData {
    pub priority: u16,
    pub weight: u16,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaptrData {
    pub order: u16,
    pub preference: u16,
    pub flags: String,
    pub service: String,
    pub regexp: String,
    pub replacement: String,
}

/// Service binding: SVCB and HTTPS. `params` keeps the SvcParams as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBindingData {
    pub priority: u16,
    pub target: String,
    pub params: String,
}

impl ServiceBindingData {
    /// Priority 0 marks the alias form.
    pub fn is_alias_mode(&self) -> bool {
        self.priority == 0
    }
}
