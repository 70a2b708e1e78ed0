//! Visit notification for asynchronous counting.

/// A successful resolution waiting to be counted.
///
/// Created by [`crate::application::services::LinkService::resolve_link`]
/// after the lookup succeeds and consumed by
/// [`crate::domain::visit_worker::run_visit_worker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitEvent {
    pub link_id: i64,
}

impl VisitEvent {
    pub fn new(link_id: i64) -> Self {
        Self { link_id }
    }
}
