//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Durable store of short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the code is already in use.
    /// The store keeps exactly one row per code.
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by exact code match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Lists every link, newest first.
    ///
    /// Links created at the same instant are ordered by descending id.
    async fn list(&self) -> Result<Vec<Link>, StoreError>;

    /// Returns true if the store answers a trivial query in time.
    async fn health_check(&self) -> bool;
}
