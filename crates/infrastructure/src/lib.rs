//! zkns infrastructure: coordination-store adapters
pub mod zookeeper;
