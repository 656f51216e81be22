use std::fmt;

use crate::config::SoaConfig;

/// Serial written into every SOA answer.
///
/// Nothing here tracks zone versions, so the serial is a fixed stand-in.
/// PowerDNS replaces it through the `SOA-EDIT` metadata (`EPOCH`).
pub const SOA_SERIAL_PLACEHOLDER: u32 = 1;

/// Start-of-authority data for the served zone.
///
/// Built once at startup and shared read-only by every SOA query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaRecord {
    pub ttl: u32,
    pub nameserver: String,
    pub email: String,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub nxdomain_ttl: u32,
}

impl SoaRecord {
    /// Builds the record for `zone`, filling a blank nameserver with
    /// `ns1.<zone>` and a blank email with `root.<zone>`.
    pub fn from_config(zone: &str, config: &SoaConfig) -> Self {
        let zone = zone.trim_matches('.');

        let nameserver = if config.nameserver.is_empty() {
            format!("ns1.{}", zone)
        } else {
            config.nameserver.clone()
        };
        let email = if config.email.is_empty() {
            format!("root.{}", zone)
        } else {
            config.email.clone()
        };

        Self {
            ttl: config.ttl,
            nameserver,
            email,
            refresh: config.refresh,
            retry: config.retry,
            expire: config.expire,
            nxdomain_ttl: config.nxdomain_ttl,
        }
    }
}

/// Zone-file style SOA content:
/// `<nameserver> <email> <refresh> <serial> <retry> <expire> <nxdomain_ttl>`.
impl fmt::Display for SoaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.nameserver,
            self.email,
            self.refresh,
            SOA_SERIAL_PLACEHOLDER,
            self.retry,
            self.expire,
            self.nxdomain_ttl
        )
    }
}
