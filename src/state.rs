//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, MetricsService};

/// Services shared by all handlers.
///
/// Cloning is cheap; every field is reference-counted. The stores behind the
/// services are opened once in [`crate::server::run`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub metrics_service: Arc<MetricsService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, metrics_service: Arc<MetricsService>) -> Self {
        Self {
            link_service,
            metrics_service,
        }
    }
}
