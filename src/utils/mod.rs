//! Helpers shared by the store adapters.
//!
//! - [`db_error`] - PostgreSQL error classification

pub mod db_error;
