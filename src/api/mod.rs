//! REST API layer for HTTP request/response handling.
//!
//! This layer validates requests, calls the application services and maps
//! their outcomes to status codes. It holds no business logic.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
