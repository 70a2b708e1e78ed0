//! Application error type and its HTTP mapping.
//!
//! Every failure is translated here into a status code and a small JSON body
//! of the form `{"message": "..."}`. Nothing crosses the HTTP boundary as an
//! unhandled fault.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// Message returned when a code is already taken.
pub const DUPLICATE_CODE_MESSAGE: &str = "Duplicated code!";
/// Message returned when a code does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "Link not found";
/// Message returned for every store failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Request shape or content failed its declared constraints.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("Duplicated code!")]
    DuplicateCode,

    #[error("Link not found")]
    NotFound,

    /// Any store failure other than a duplicate code, including timeouts.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::DuplicateCode | AppError::NotFound => {
                StatusCode::BAD_REQUEST
            }
            AppError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation { message, details } => ErrorBody {
                message,
                details: Some(details),
            },
            AppError::DuplicateCode => ErrorBody {
                message: DUPLICATE_CODE_MESSAGE.to_string(),
                details: None,
            },
            AppError::NotFound => ErrorBody {
                message: NOT_FOUND_MESSAGE.to_string(),
                details: None,
            },
            AppError::StoreUnavailable(reason) => {
                tracing::error!(%reason, "Store unavailable");
                ErrorBody {
                    message: INTERNAL_ERROR_MESSAGE.to_string(),
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateCode(_) => AppError::DuplicateCode,
            other => AppError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
