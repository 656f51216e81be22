use std::sync::Arc;
use tracing::{debug, instrument};
use zkns_domain::{BackendAnswer, DomainError, QueryType};

use crate::use_cases::SynthesizeRecordsUseCase;

/// Backend `lookup`: dispatches on the requested record type.
pub struct LookupUseCase {
    records: Arc<SynthesizeRecordsUseCase>,
}

impl LookupUseCase {
    pub fn new(records: Arc<SynthesizeRecordsUseCase>) -> Self {
        Self { records }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, qname: &str, qtype: &QueryType) -> Result<BackendAnswer, DomainError> {
        debug!(qname, qtype = %qtype, "QUERY");

        // ANY gets the A answer only; no SOA is mixed in.
        match qtype {
            QueryType::A | QueryType::Any => self.records.a_records(qname).await,
            QueryType::Soa => Ok(self.records.soa_records(qname)),
            QueryType::Other(_) => Ok(BackendAnswer::NoMatch),
        }
    }
}
