//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1` against the link store
/// 2. **Counter store**: Redis PING
/// 3. **Visit queue**: Checks the channel is open and reports capacity
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (database, counter_store) = tokio::join!(
        check_database(&state),
        check_counter_store(&state)
    );
    let visit_queue = check_visit_queue(&state);

    let all_healthy = database.is_ok() && counter_store.is_ok() && visit_queue.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            counter_store,
            visit_queue,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    if state.link_service.store_healthy().await {
        CheckStatus::ok("Connected")
    } else {
        CheckStatus::error("Database unreachable")
    }
}

async fn check_counter_store(state: &AppState) -> CheckStatus {
    if state.metrics_service.store_healthy().await {
        CheckStatus::ok("Redis connected")
    } else {
        CheckStatus::error("Redis connection failed")
    }
}

fn check_visit_queue(state: &AppState) -> CheckStatus {
    match state.link_service.visit_queue_capacity() {
        Some(capacity) => CheckStatus::ok(format!("Capacity: {}", capacity)),
        None => CheckStatus::error("Visit queue is closed"),
    }
}
