use std::sync::Arc;
use tracing::error;
use zkns_application::ports::ServiceSetReader;
use zkns_domain::config::ZookeeperConfig;
use zkns_infrastructure::zookeeper::ZookeeperServiceSetReader;

pub async fn connect_store(config: &ZookeeperConfig) -> anyhow::Result<Arc<dyn ServiceSetReader>> {
    let reader = ZookeeperServiceSetReader::connect(&config.ensemble)
        .await
        .map_err(|e| {
            error!(error = %e, ensemble = %config.ensemble, "Failed to connect to ZooKeeper");
            anyhow::anyhow!(e)
        })?;

    Ok(Arc::new(reader))
}
