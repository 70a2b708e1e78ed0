//! Store-level failure classification.

use std::time::Duration;
use thiserror::Error;

/// Failure reported by a store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The short code is already taken. No state was changed.
    #[error("short code already exists: {0}")]
    DuplicateCode(String),

    /// Connectivity loss, driver failure or an unrecognized constraint violation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}
