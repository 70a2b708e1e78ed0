//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Store trait definitions and the store error taxonomy
//! - [`visit_event`] - Visit notification passed from redirects to the recorder
//! - [`visit_worker`] - Background task that applies visit increments
//!
//! # Visit Counting Flow
//!
//! 1. The redirect handler resolves a code through
//!    [`crate::application::services::LinkService::resolve_link`]
//! 2. A [`visit_event::VisitEvent`] is pushed onto a bounded channel without waiting
//! 3. [`visit_worker::run_visit_worker`] increments the counter store
//!
//! The lookup and the increment are two independent steps. Between the
//! redirect response and the increment the visible count lags behind by the
//! queue depth, and an increment that fails is logged and lost.

pub mod entities;
pub mod repositories;
pub mod visit_event;
pub mod visit_worker;
