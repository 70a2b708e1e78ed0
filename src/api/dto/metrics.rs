//! DTOs for the metrics endpoint.

use serde::Serialize;

use crate::domain::entities::LinkMetric;

/// Visit count of one link as returned by `GET /api/metrics`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricItem {
    pub short_link_id: i64,
    pub clicks: u64,
}

impl From<LinkMetric> for MetricItem {
    fn from(metric: LinkMetric) -> Self {
        Self {
            short_link_id: metric.link_id,
            clicks: metric.clicks,
        }
    }
}
