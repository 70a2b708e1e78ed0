//! Application layer services.
//!
//! Services consume the store traits and provide the operations that HTTP
//! handlers call.
//!
//! - [`services::link_service::LinkService`] - Link creation, resolution and listing
//! - [`services::metrics_service::MetricsService`] - Visit count reporting

pub mod services;
