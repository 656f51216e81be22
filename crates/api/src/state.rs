use std::sync::Arc;
use zkns_application::use_cases::{GetDomainMetadataUseCase, LookupUseCase};

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupUseCase>,
    pub get_domain_metadata: Arc<GetDomainMetadataUseCase>,
}
