use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// DNS domain whose records are served.
    #[serde(default = "default_domain")]
    pub domain: String,

    /// TTL for A records.
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            ttl: default_ttl(),
        }
    }
}

impl ZoneConfig {
    /// The domain as compared against query names: lower case, no
    /// surrounding dots.
    pub fn normalized_domain(&self) -> String {
        crate::domain_name::normalize(&self.domain)
    }
}

fn default_domain() -> String {
    "zk.example.com".to_string()
}

fn default_ttl() -> u32 {
    60
}
