//! Handler for wiping all records.

use axum::{Json, extract::State};

use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes every mapping and domain count.
///
/// # Endpoint
///
/// `DELETE /deleteAll`
///
/// With the default `RESET_SCOPE=database` this flushes the entire Redis
/// logical database, not only this service's keys.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store rejects the reset.
pub async fn delete_all_handler(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.shortener.delete_all().await?;
    Ok(Json(MessageResponse::new("All records have been deleted.")))
}
