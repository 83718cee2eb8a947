//! Handler for domain analytics.

use axum::{Json, extract::State};

use crate::api::dto::metrics::MetricsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most shortened domains.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Response
///
/// ```json
/// {
///   "top_domains": [
///     { "member": "example.com", "score": 4.0 },
///     { "member": "docs.rs", "score": 1.0 }
///   ]
/// }
/// ```
///
/// The number of entries is capped by `TOP_DOMAINS_LIMIT` (default 3).
/// An empty list is returned before anything has been shortened.
///
/// # Errors
///
/// Returns 500 Internal Server Error on store failures.
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<MetricsResponse>, AppError> {
    let top_domains = state
        .shortener
        .top_domains(state.top_domains_limit)
        .await?;

    Ok(Json(MetricsResponse { top_domains }))
}
