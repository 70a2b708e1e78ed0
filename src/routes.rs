//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`       - Short link redirect
//! - `GET  /health`       - Health check: DB, counter store, visit queue
//! - `GET  /api/links`    - List links
//! - `POST /api/links`    - Register a short code
//! - `GET  /api/metrics`  - Visit counts
//!
//! Static routes take precedence over `/{code}`, so `health` and `api` can
//! never be resolved as short codes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Wraps [`router`] so that `/api/links/` and `/api/links` are the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
