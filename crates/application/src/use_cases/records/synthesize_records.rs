use std::sync::Arc;
use tracing::{debug, instrument};
use zkns_domain::{
    config::ZoneConfig, domain_name, BackendAnswer, BackendRecord, DomainError, QueryType,
    SoaRecord,
};

use crate::use_cases::ResolveServiceSetUseCase;

/// Shapes resolved serversets and the static SOA into backend records.
pub struct SynthesizeRecordsUseCase {
    resolver: Arc<ResolveServiceSetUseCase>,
    soa: Arc<SoaRecord>,
    // Case-folded, for matching.
    zone: Arc<str>,
    // As configured, for the SOA owner name.
    zone_name: Arc<str>,
    ttl: u32,
}

impl SynthesizeRecordsUseCase {
    pub fn new(
        resolver: Arc<ResolveServiceSetUseCase>,
        soa: Arc<SoaRecord>,
        zone: &ZoneConfig,
    ) -> Self {
        Self {
            resolver,
            soa,
            zone: zone.normalized_domain().into(),
            zone_name: zone.domain.trim_matches('.').into(),
            ttl: zone.ttl,
        }
    }

    /// One A record per resolved instance, named as queried.
    ///
    /// Nothing resolved is an empty answer, never `NoMatch`. Ports are not
    /// exposed.
    #[instrument(skip(self))]
    pub async fn a_records(&self, qname: &str) -> Result<BackendAnswer, DomainError> {
        let instances = self.resolver.execute(qname).await?;

        let records = instances
            .into_iter()
            .map(|instance| BackendRecord::new(QueryType::A, qname, self.ttl, instance.host))
            .collect::<Vec<_>>();

        debug!(qname, count = records.len(), "A records synthesized");
        Ok(BackendAnswer::Records(records))
    }

    /// The zone SOA, or `NoMatch` for names not ending with the zone.
    ///
    /// This is a plain suffix test, so `xzk.example.com` still gets the SOA
    /// of `zk.example.com`.
    #[instrument(skip(self))]
    pub fn soa_records(&self, qname: &str) -> BackendAnswer {
        if !domain_name::normalize(qname).ends_with(self.zone.as_ref()) {
            debug!(qname, zone = %self.zone, "SOA requested outside served zone");
            return BackendAnswer::NoMatch;
        }

        BackendAnswer::Records(vec![BackendRecord::new(
            QueryType::Soa,
            self.zone_name.as_ref(),
            self.soa.ttl,
            self.soa.to_string(),
        )])
    }
}
