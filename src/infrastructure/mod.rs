//! Infrastructure layer for the two external stores.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL link repository
//! - [`counter`] - Redis visit counter
//!
//! Store handles are opened once at startup by [`crate::server`] and injected
//! into the adapters here. Every adapter call is bounded by [`bounded`].

pub mod counter;
pub mod persistence;

use std::future::Future;
use std::time::Duration;

use crate::domain::repositories::StoreError;

/// Runs a store call with an upper bound on its duration.
///
/// Expiry maps to [`StoreError::Timeout`]; the inner result is returned
/// untouched so the caller can classify driver errors itself.
pub async fn bounded<F>(limit: Duration, call: F) -> Result<F::Output, StoreError>
where
    F: Future,
{
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| StoreError::Timeout(limit))
}
