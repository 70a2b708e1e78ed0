//! Background visit recorder.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::repositories::VisitCounter;
use crate::domain::visit_event::VisitEvent;

/// Applies queued visits to the counter store until every sender is dropped.
///
/// Events are processed one at a time in arrival order. Failed increments are
/// logged and not retried.
pub async fn run_visit_worker(
    mut rx: mpsc::Receiver<VisitEvent>,
    counter: Arc<dyn VisitCounter>,
) {
    while let Some(event) = rx.recv().await {
        record_visit(counter.as_ref(), event).await;
    }

    info!("Visit queue closed, worker stopped");
}

/// Increments the counter for a single visit.
///
/// Returns `true` if the counter store acknowledged the increment.
pub async fn record_visit<C>(counter: &C, event: VisitEvent) -> bool
where
    C: VisitCounter + ?Sized,
{
    match counter.increment(event.link_id).await {
        Ok(clicks) => {
            debug!(link_id = event.link_id, clicks, "Visit recorded");
            true
        }
        Err(e) => {
            warn!(link_id = event.link_id, error = %e, "Failed to record visit");
            false
        }
    }
}
