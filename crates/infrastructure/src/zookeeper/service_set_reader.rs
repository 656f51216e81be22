use async_trait::async_trait;
use tracing::{debug, info};
use zkns_application::ports::ServiceSetReader;
use zkns_domain::{DomainError, ServiceInstance};
use zookeeper_client as zk;

use super::serverset;

/// Reads serversets from a ZooKeeper ensemble.
///
/// The session, reconnects and watches are owned by the `zookeeper-client`
/// handle; this adapter only issues reads.
#[derive(Clone)]
pub struct ZookeeperServiceSetReader {
    client: zk::Client,
}

impl ZookeeperServiceSetReader {
    /// Connects to `ensemble`: a comma-delimited `host:port` list,
    /// optionally followed by a `/chroot` path.
    pub async fn connect(ensemble: &str) -> Result<Self, DomainError> {
        let cluster = normalize_ensemble(ensemble);
        info!(ensemble = %cluster, "Connecting to ZooKeeper");

        let client = zk::Client::connect(&cluster)
            .await
            .map_err(|e| DomainError::StoreUnavailable(format!("{}: {}", cluster, e)))?;

        info!(ensemble = %cluster, "ZooKeeper session established");
        Ok(Self::new(client))
    }

    pub fn new(client: zk::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ServiceSetReader for ZookeeperServiceSetReader {
    async fn read_service_set(&self, path: &str) -> Result<Vec<ServiceInstance>, DomainError> {
        let node = znode_path(path);

        let mut children = match self.client.list_children(&node).await {
            Ok(children) => children,
            Err(zk::Error::NoNode) => {
                debug!(path = %node, "Serverset node does not exist");
                return Ok(Vec::new());
            }
            Err(e) => return Err(store_error(&node, e)),
        };

        children.retain(|name| serverset::is_member_node(name));

        let mut payloads = Vec::with_capacity(children.len());
        for child in children {
            let member_path = format!("{}/{}", node, child);

            let data = match self.client.get_data(&member_path).await {
                Ok((data, _stat)) => Some(data),
                // Ephemeral members can disappear between list and read.
                Err(zk::Error::NoNode) => None,
                Err(e) => return Err(store_error(&member_path, e)),
            };
            payloads.push((child, data));
        }

        let members = serverset::collect_members(&node, payloads);
        debug!(path = %node, members = members.len(), "Serverset read");
        Ok(members)
    }
}

/// `localhost:2181/` and `localhost:2181` name the same ensemble; the
/// client rejects an empty chroot.
fn normalize_ensemble(ensemble: &str) -> String {
    ensemble.trim().trim_end_matches('/').to_string()
}

fn znode_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

fn store_error(path: &str, error: zk::Error) -> DomainError {
    match error {
        zk::Error::ConnectionLoss | zk::Error::SessionExpired | zk::Error::ClientClosed => {
            DomainError::StoreUnavailable(format!("{}: {}", path, error))
        }
        other => DomainError::StoreError {
            path: path.to_string(),
            message: other.to_string(),
        },
    }
}
