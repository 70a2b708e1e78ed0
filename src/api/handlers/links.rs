//! Handlers for link registration and listing.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, CreateLinkResponse, LinkItem};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "code": "abc", "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortLinkId": 1 }
/// ```
///
/// # Errors
///
/// - 400 with `{"message": "Duplicated code!"}` if the code is taken
/// - 400 with a validation message if the body is malformed
/// - 500 with `{"message": "Internal server error"}` on store failures
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let short_link_id = state
        .link_service
        .create_link(payload.code, payload.url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse { short_link_id }),
    ))
}

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkItem::from).collect()))
}
