//! Handler for visit metrics.

use axum::{Json, extract::State};

use crate::api::dto::metrics::MetricItem;
use crate::error::AppError;
use crate::state::AppState;

/// Returns visit counts, highest first.
///
/// # Endpoint
///
/// `GET /api/metrics`
///
/// # Response
///
/// ```json
/// [ { "shortLinkId": 1, "clicks": 3 } ]
/// ```
///
/// Only counters within the configured score ceiling are included.
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MetricItem>>, AppError> {
    let metrics = state.metrics_service.top_metrics().await?;

    Ok(Json(metrics.into_iter().map(MetricItem::from).collect()))
}
