//! Trait for the per-link visit counter store.

use crate::domain::entities::LinkMetric;
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Ordered key/score store holding one visit counter per link.
///
/// Counters start absent (implicitly zero) and are only ever incremented.
///
/// # Implementations
///
/// - [`crate::infrastructure::counter::RedisVisitCounter`] - Redis sorted set
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitCounter: Send + Sync {
    /// Atomically adds one visit to `link_id` and returns the new count.
    async fn increment(&self, link_id: i64) -> Result<u64, StoreError>;

    /// Reads every counter whose score lies in `[0, ceiling]`.
    ///
    /// No ordering is guaranteed.
    async fn scores_up_to(&self, ceiling: u64) -> Result<Vec<LinkMetric>, StoreError>;

    /// Returns true if the counter store responds to a PING.
    async fn health_check(&self) -> bool;
}
