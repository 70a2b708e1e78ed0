//! Link entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// Minimum number of characters in a short code.
pub const MIN_CODE_LENGTH: usize = 3;

/// Codes shadowed by static routes.
///
/// `GET /health` and everything under `/api` never reach the redirect handler.
pub const RESERVED_CODES: &[&str] = &["health", "api"];

/// Characters that end the path segment a code is matched against.
pub const FORBIDDEN_CODE_CHARS: &[char] = &['/', '?', '#'];

/// A stored short link.
///
/// Links are created once and never updated or deleted by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

/// Why a code cannot be used as a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeViolation {
    TooShort,
    Reserved,
    ForbiddenChar,
}

/// Checks that `code` can be registered and later resolved by `GET /{code}`.
pub fn check_code(code: &str) -> Result<(), CodeViolation> {
    if code.chars().count() < MIN_CODE_LENGTH {
        return Err(CodeViolation::TooShort);
    }

    if code.contains(FORBIDDEN_CODE_CHARS) {
        return Err(CodeViolation::ForbiddenChar);
    }

    if RESERVED_CODES.contains(&code) {
        return Err(CodeViolation::Reserved);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            7,
            "abc".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 7);
        assert_eq!(link.code, "abc");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_check_code_length() {
        assert_eq!(check_code(""), Err(CodeViolation::TooShort));
        assert_eq!(check_code("ab"), Err(CodeViolation::TooShort));
        assert_eq!(check_code("abc"), Ok(()));
        assert_eq!(check_code("longer-code"), Ok(()));
        // counted in characters, not bytes
        assert_eq!(check_code("éé"), Err(CodeViolation::TooShort));
    }

    #[test]
    fn test_check_code_rejects_unroutable_codes() {
        assert_eq!(check_code("health"), Err(CodeViolation::Reserved));
        assert_eq!(check_code("api"), Err(CodeViolation::Reserved));
        assert_eq!(check_code("ab/cd"), Err(CodeViolation::ForbiddenChar));
        assert_eq!(check_code("abc?x"), Err(CodeViolation::ForbiddenChar));
        assert_eq!(check_code("abc#x"), Err(CodeViolation::ForbiddenChar));
        assert_eq!(check_code("ab"), Err(CodeViolation::TooShort));
        assert_eq!(check_code("healthy"), Ok(()));
        assert_eq!(check_code("apis"), Ok(()));
    }
}
