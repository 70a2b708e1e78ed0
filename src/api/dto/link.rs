//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body of `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Short code chosen by the creator.
    #[validate(length(min = 3, message = "Short code must have at least 3 characters"))]
    pub code: String,

    /// Destination URL.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub short_link_id: i64,
}

/// Path parameters of `GET /{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct CodePath {
    #[validate(length(min = 3, message = "Short code must have at least 3 characters"))]
    pub code: String,
}

/// A link as returned by `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            original_url: link.original_url,
            created_at: link.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_link_request_validation() {
        let valid = CreateLinkRequest {
            code: "abc".to_string(),
            url: "https://example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_code = CreateLinkRequest {
            code: "ab".to_string(),
            url: "https://example.com".to_string(),
        };
        let errors = short_code.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("code"));

        let bad_url = CreateLinkRequest {
            code: "abc".to_string(),
            url: "example".to_string(),
        };
        let errors = bad_url.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_create_link_response_is_camel_case() {
        let body = serde_json::to_value(CreateLinkResponse { short_link_id: 5 }).unwrap();
        assert_eq!(body, serde_json::json!({ "shortLinkId": 5 }));
    }
}
