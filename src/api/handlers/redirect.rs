//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{short_key}`
///
/// Answers `301 Moved Permanently` with the stored URL in `Location`.
///
/// # Errors
///
/// Returns 400 Bad Request if the key is empty.
/// Returns 404 Not Found if no mapping exists for the key.
/// Returns 500 Internal Server Error on store failures.
pub async fn redirect_handler(
    Path(short_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if short_key.is_empty() {
        return Err(AppError::bad_request(
            "shortURL cannot be empty",
            json!({}),
        ));
    }

    let original_url = state.shortener.redirect(&short_key).await?;

    let location = HeaderValue::from_str(&original_url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "short_key": short_key }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
