//! zkns domain layer
pub mod backend_answer;
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod query_type;
pub mod service_instance;
pub mod service_path;
pub mod soa;

pub use backend_answer::{BackendAnswer, BackendRecord};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use query_type::{MetadataKind, QueryType};
pub use service_instance::ServiceInstance;
pub use service_path::{candidate_paths, ServicePath, ServicePathCandidates};
pub use soa::{SoaRecord, SOA_SERIAL_PLACEHOLDER};
