use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;
use zkns_domain::DomainError;

use crate::dto::BackendResponse;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

/// Failed calls answer `{"result": false, "log": [...]}` with a non-2xx
/// status; PowerDNS writes the log lines and fails the query.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::StoreError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(error = %self.0, status = status.as_u16(), "Backend call failed");

        (status, Json(BackendResponse::failure(self.0.to_string()))).into_response()
    }
}
