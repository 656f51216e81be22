pub mod dnsapi;

pub use dnsapi::{get_domain_metadata, lookup};
