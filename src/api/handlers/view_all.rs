//! Handler for listing every stored mapping.

use std::collections::BTreeMap;

use axum::{Json, extract::State};

use crate::error::AppError;
use crate::state::AppState;

/// Lists all URL mappings keyed by storage key.
///
/// # Endpoint
///
/// `GET /viewAll`
///
/// # Response
///
/// ```json
/// { "url:3641c5f2": "https://example.com/page" }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error if any scan round or read fails;
/// no partial listing is returned.
pub async fn view_all_handler(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    let mappings = state.shortener.view_all().await?;
    Ok(Json(mappings))
}
