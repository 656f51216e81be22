use async_trait::async_trait;
use zkns_domain::{DomainError, ServiceInstance};

/// Read access to the serversets held by the coordination store.
#[async_trait]
pub trait ServiceSetReader: Send + Sync {
    /// Current members registered under `path` (store-relative, no leading
    /// slash).
    ///
    /// A node that does not exist and a node with no members both yield an
    /// empty list.
    async fn read_service_set(&self, path: &str) -> Result<Vec<ServiceInstance>, DomainError>;
}
