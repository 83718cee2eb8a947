//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, ServiceStatus, StoreCheck};
use crate::state::AppState;

/// Reports whether the store answers a PING.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store ping failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Store reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = StoreCheck::from_ping(state.shortener.health_check().await);
    let response = HealthResponse::new(store);

    match response.status {
        ServiceStatus::Healthy => Ok(Json(response)),
        ServiceStatus::Degraded => Err((StatusCode::SERVICE_UNAVAILABLE, Json(response))),
    }
}
