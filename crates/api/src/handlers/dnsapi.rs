use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, instrument};
use zkns_domain::{MetadataKind, QueryType};

use crate::{dto::BackendResponse, errors::ApiError, state::AppState};

/// GET /lookup/{qname}/{qtype}
#[instrument(skip(state), name = "api_lookup")]
pub async fn lookup(
    State(state): State<AppState>,
    Path((qname, qtype)): Path<(String, String)>,
) -> Result<Json<BackendResponse>, ApiError> {
    let qtype = QueryType::from(qtype.as_str());

    let answer = state.lookup.execute(&qname, &qtype).await?;
    let response = BackendResponse::from(answer);

    debug!(response = ?response, "DNS response");
    Ok(Json(response))
}

/// GET /getDomainMetadata/{qname}/{qkind}
#[instrument(skip(state), name = "api_get_domain_metadata")]
pub async fn get_domain_metadata(
    State(state): State<AppState>,
    Path((qname, qkind)): Path<(String, String)>,
) -> Json<BackendResponse> {
    let kind = MetadataKind::from(qkind.as_str());

    let response = BackendResponse::from(state.get_domain_metadata.execute(&qname, &kind));

    debug!(response = ?response, "DNS response");
    Json(response)
}
