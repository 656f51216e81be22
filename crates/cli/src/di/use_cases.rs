use std::sync::Arc;
use tracing::info;
use zkns_application::ports::ServiceSetReader;
use zkns_application::use_cases::{
    GetDomainMetadataUseCase, LookupUseCase, ResolveServiceSetUseCase, SynthesizeRecordsUseCase,
};
use zkns_domain::{Config, SoaRecord};

pub struct UseCases {
    pub lookup: Arc<LookupUseCase>,
    pub get_domain_metadata: Arc<GetDomainMetadataUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, store: Arc<dyn ServiceSetReader>) -> Self {
        let soa = Arc::new(SoaRecord::from_config(&config.zone.domain, &config.soa));
        info!(zone = %config.zone.domain, soa = %soa, "SOA record built");

        let resolver = Arc::new(ResolveServiceSetUseCase::new(store, &config.zone.domain));
        let records = Arc::new(SynthesizeRecordsUseCase::new(resolver, soa, &config.zone));

        Self {
            lookup: Arc::new(LookupUseCase::new(records)),
            get_domain_metadata: Arc::new(GetDomainMetadataUseCase::new()),
        }
    }
}
