//! API route configuration.

use crate::api::handlers::{create_link_handler, list_links_handler, metrics_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /links`   - List links, newest first
/// - `POST /links`   - Register a short code
/// - `GET  /metrics` - Visit counts, highest first
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/metrics", get(metrics_handler))
}
