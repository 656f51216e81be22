pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod soa;
pub mod zone;
pub mod zookeeper;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use soa::SoaConfig;
pub use zone::ZoneConfig;
pub use zookeeper::ZookeeperConfig;
