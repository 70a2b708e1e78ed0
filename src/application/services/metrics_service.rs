//! Visit count reporting.

use std::sync::Arc;

use crate::domain::entities::LinkMetric;
use crate::domain::repositories::VisitCounter;
use crate::error::AppError;

/// Default inclusive score ceiling applied when reading counters.
pub const DEFAULT_SCORE_CEILING: u64 = 50;

/// Service reporting per-link visit counts.
pub struct MetricsService<C: VisitCounter + ?Sized = dyn VisitCounter> {
    counter: Arc<C>,
    score_ceiling: u64,
}

impl<C: VisitCounter + ?Sized> MetricsService<C> {
    /// Creates a new metrics service.
    ///
    /// Only counters with a score in `[0, score_ceiling]` are reported.
    pub fn new(counter: Arc<C>, score_ceiling: u64) -> Self {
        Self {
            counter,
            score_ceiling,
        }
    }

    /// Returns visit counts ordered by clicks, highest first.
    ///
    /// Links with equal counts are ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on counter store failures.
    pub async fn top_metrics(&self) -> Result<Vec<LinkMetric>, AppError> {
        let mut metrics = self.counter.scores_up_to(self.score_ceiling).await?;

        metrics.sort_by(|a, b| {
            b.clicks
                .cmp(&a.clicks)
                .then_with(|| a.link_id.cmp(&b.link_id))
        });

        Ok(metrics)
    }

    /// Returns true if the counter store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.counter.health_check().await
    }
}
