use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use zkns_domain::{candidate_paths, domain_name, DomainError, ServiceInstance};

use crate::ports::ServiceSetReader;

/// Finds the serverset a query name refers to.
///
/// Candidate paths are probed most specific first. The first non-empty set
/// wins; when the name carries a shard, the set must also contain that
/// shard, otherwise the search moves on to the next candidate.
pub struct ResolveServiceSetUseCase {
    reader: Arc<dyn ServiceSetReader>,
    zone: Arc<str>,
}

impl ResolveServiceSetUseCase {
    pub fn new(reader: Arc<dyn ServiceSetReader>, zone: &str) -> Self {
        Self {
            reader,
            zone: domain_name::normalize(zone).into(),
        }
    }

    /// Returns the matching instances, or an empty list when no candidate
    /// matches. Store failures abort the lookup and are not retried.
    #[instrument(skip(self))]
    pub async fn execute(&self, qname: &str) -> Result<Vec<ServiceInstance>, DomainError> {
        let candidates = candidate_paths(qname, &self.zone);
        debug!(
            qname,
            shard = ?candidates.shard(),
            candidates = candidates.len(),
            "Resolving serverset"
        );

        for candidate in candidates {
            let members = self
                .reader
                .read_service_set(&candidate.path)
                .await
                .map_err(|e| {
                    error!(error = %e, path = %candidate.path, "Failed to read serverset");
                    e
                })?;

            if members.is_empty() {
                debug!(
                    path = %candidate.path,
                    depth = candidate.depth(),
                    "No serverset members"
                );
                continue;
            }

            let Some(shard) = candidate.shard else {
                debug!(
                    path = %candidate.path,
                    members = members.len(),
                    "Serverset found"
                );
                return Ok(members);
            };

            if let Some(instance) = members.into_iter().find(|m| m.is_shard(shard)) {
                debug!(path = %candidate.path, shard, instance = %instance, "Shard found");
                return Ok(vec![instance]);
            }

            debug!(path = %candidate.path, shard, "Serverset has no such shard");
        }

        info!(qname, "nothing found");
        Ok(Vec::new())
    }
}
