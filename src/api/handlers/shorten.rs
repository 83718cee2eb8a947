//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::short_url;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "originalURL": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "3641c5f2" }
/// ```
///
/// When `BASE_URL` is configured the key is prefixed with it, e.g.
/// `"https://s.example.com/3641c5f2"`.
///
/// The key is deterministic: shortening the same URL again returns the same
/// link and counts its domain once more.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, `originalURL` is
/// missing or empty, or the URL cannot be parsed.
/// Returns 500 Internal Server Error if the store write fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let key = state.shortener.shorten(&payload.original_url).await?;

    Ok(Json(ShortenResponse {
        short_url: short_url(state.base_url.as_deref(), key.as_str()),
    }))
}
