pub mod backend;
pub mod records;
pub mod service_sets;

pub use backend::{GetDomainMetadataUseCase, LookupUseCase};
pub use records::SynthesizeRecordsUseCase;
pub use service_sets::ResolveServiceSetUseCase;
