use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoaConfig {
    /// TTL of the SOA record itself.
    #[serde(default = "default_soa_ttl")]
    pub ttl: u32,

    /// Authoritative nameserver. Blank means `ns1.<domain>`.
    #[serde(default)]
    pub nameserver: String,

    /// Hostmaster mailbox in DNS form. Blank means `root.<domain>`.
    #[serde(default)]
    pub email: String,

    #[serde(default = "default_refresh")]
    pub refresh: u32,

    #[serde(default = "default_retry")]
    pub retry: u32,

    #[serde(default = "default_expire")]
    pub expire: u32,

    /// Negative caching TTL.
    #[serde(default = "default_nxdomain_ttl")]
    pub nxdomain_ttl: u32,
}

impl Default for SoaConfig {
    fn default() -> Self {
        Self {
            ttl: default_soa_ttl(),
            nameserver: String::new(),
            email: String::new(),
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            nxdomain_ttl: default_nxdomain_ttl(),
        }
    }
}

fn default_soa_ttl() -> u32 {
    300
}

fn default_refresh() -> u32 {
    1200
}

fn default_retry() -> u32 {
    180
}

fn default_expire() -> u32 {
    86400
}

fn default_nxdomain_ttl() -> u32 {
    60
}
