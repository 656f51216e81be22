use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZookeeperConfig {
    /// Comma-delimited `host:port` list, optionally followed by a `/chroot`
    /// path, e.g. `zk1:2181,zk2:2181/services`.
    #[serde(default = "default_ensemble")]
    pub ensemble: String,
}

impl Default for ZookeeperConfig {
    fn default() -> Self {
        Self {
            ensemble: default_ensemble(),
        }
    }
}

fn default_ensemble() -> String {
    "localhost:2181/".to_string()
}
