use tracing::{debug, instrument};
use zkns_domain::{BackendAnswer, MetadataKind};

/// `SOA-EDIT` value that makes PowerDNS use the current epoch as the SOA
/// serial.
pub const SOA_EDIT_EPOCH: &str = "EPOCH";

/// Backend `getDomainMetadata`.
#[derive(Debug, Default)]
pub struct GetDomainMetadataUseCase;

impl GetDomainMetadataUseCase {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self))]
    pub fn execute(&self, qname: &str, kind: &MetadataKind) -> BackendAnswer {
        debug!(qname, kind = %kind, "QUERY");

        match kind {
            MetadataKind::SoaEdit => BackendAnswer::Metadata(vec![SOA_EDIT_EPOCH.to_string()]),
            MetadataKind::Other(_) => BackendAnswer::NoMatch,
        }
    }
}
