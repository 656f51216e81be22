use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::soa::SoaConfig;
use super::zone::ZoneConfig;
use super::zookeeper::ZookeeperConfig;

const LOCAL_CONFIG_PATH: &str = "zkns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/zkns/config.toml";

/// Main configuration structure for zkns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener for the PowerDNS remote backend
    #[serde(default)]
    pub server: ServerConfig,

    /// Coordination store connection
    #[serde(default)]
    pub zookeeper: ZookeeperConfig,

    /// Served zone and A record TTL
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Static SOA fields
    #[serde(default)]
    pub soa: SoaConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zkns.toml in current directory
    /// 3. /etc/zkns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(ensemble) = overrides.zookeeper_ensemble {
            self.zookeeper.ensemble = ensemble;
        }
        if let Some(domain) = overrides.domain {
            self.zone.domain = domain;
        }
        if let Some(ttl) = overrides.ttl {
            self.zone.ttl = ttl;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.zone.normalized_domain().is_empty() {
            return Err(ConfigError::Validation(
                "No DNS domain configured".to_string(),
            ));
        }

        if self.zone.ttl == 0 {
            return Err(ConfigError::Validation("Record TTL cannot be 0".to_string()));
        }

        let hosts = self.zookeeper.ensemble.split('/').next().unwrap_or_default();
        if hosts.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No ZooKeeper ensemble configured".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub zookeeper_ensemble: Option<String>,
    pub domain: Option<String>,
    pub ttl: Option<u32>,
    pub log_level: Option<String>,
}
