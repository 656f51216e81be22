mod get_domain_metadata;
mod lookup;

pub use get_domain_metadata::{GetDomainMetadataUseCase, SOA_EDIT_EPOCH};
pub use lookup::LookupUseCase;
