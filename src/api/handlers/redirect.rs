//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::link::CodePath;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Validate the code length
/// 2. Look the code up in the link store
/// 3. Queue a visit for the counter (not awaited)
/// 4. Return 301 Moved Permanently
///
/// # Errors
///
/// Returns 400 Bad Request with `{"message": "Link not found"}` if the code
/// does not exist, or a validation error if it is shorter than 3 characters.
pub async fn redirect_handler(
    State(state): State<AppState>,
    path: Result<Path<CodePath>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(params) = path?;
    params.validate()?;

    let original_url = state.link_service.resolve_link(&params.code).await?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, original_url)],
    )
        .into_response())
}
