use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Coordination store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Coordination store error at {path}: {message}")]
    StoreError { path: String, message: String },
}
