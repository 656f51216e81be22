use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// PowerDNS remote backend methods, as called by the `http` connector.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/lookup/{qname}/{qtype}", get(handlers::lookup))
        .route(
            "/getDomainMetadata/{qname}/{qkind}",
            get(handlers::get_domain_metadata),
        )
        .with_state(state)
}
