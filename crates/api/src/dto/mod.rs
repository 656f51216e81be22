pub mod backend;

pub use backend::{BackendResponse, BackendResult, RecordDto};
