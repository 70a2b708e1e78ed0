//! Store trait definitions for the domain layer.
//!
//! These traits abstract the two external stores. Concrete implementations
//! live in `crate::infrastructure`:
//!
//! - [`LinkRepository`] - Durable link storage (PostgreSQL)
//! - [`VisitCounter`] - Volatile per-link visit counters (Redis)
//!
//! Both return [`StoreError`], which adapters produce by classifying their
//! vendor-specific failures once. Services never inspect driver errors.
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod error;
pub mod link_repository;
pub mod visit_counter;

pub use error::StoreError;
pub use link_repository::LinkRepository;
pub use visit_counter::VisitCounter;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use visit_counter::MockVisitCounter;
