//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to its destination URL
//! - [`NewLink`] - Input for creating a link
//! - [`LinkMetric`] - Visit count of a single link

pub mod link;
pub mod metric;

pub use link::{
    CodeViolation, FORBIDDEN_CODE_CHARS, Link, MIN_CODE_LENGTH, NewLink, RESERVED_CODES, check_code,
};
pub use metric::LinkMetric;
