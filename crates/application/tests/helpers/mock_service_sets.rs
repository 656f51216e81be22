#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use zkns_application::ports::ServiceSetReader;
use zkns_domain::{DomainError, ServiceInstance};

pub fn instance(host: &str) -> ServiceInstance {
    ServiceInstance::new(host, 8080, None)
}

pub fn sharded(host: &str, shard: u32) -> ServiceInstance {
    ServiceInstance::new(host, 8080, Some(shard))
}

/// In-memory serversets keyed by store path.
#[derive(Clone, Default)]
pub struct MockServiceSetReader {
    sets: Arc<RwLock<HashMap<String, Vec<ServiceInstance>>>>,
    reads: Arc<Mutex<Vec<String>>>,
    failing_paths: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockServiceSetReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(self, path: &str, members: Vec<ServiceInstance>) -> Self {
        self.set_service_set(path, members);
        self
    }

    pub fn set_service_set(&self, path: &str, members: Vec<ServiceInstance>) {
        self.sets
            .write()
            .unwrap()
            .insert(path.to_string(), members);
    }

    pub fn remove_service_set(&self, path: &str) {
        self.sets.write().unwrap().remove(path);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn fail_on(&self, path: &str) {
        self.failing_paths.write().unwrap().push(path.to_string());
    }

    /// Paths read so far, in order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServiceSetReader for MockServiceSetReader {
    async fn read_service_set(&self, path: &str) -> Result<Vec<ServiceInstance>, DomainError> {
        self.reads.lock().unwrap().push(path.to_string());

        if *self.should_fail.read().unwrap()
            || self.failing_paths.read().unwrap().iter().any(|p| p == path)
        {
            return Err(DomainError::StoreUnavailable(
                "Mock store connection lost".to_string(),
            ));
        }

        Ok(self
            .sets
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_default())
    }
}
