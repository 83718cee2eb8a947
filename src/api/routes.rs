//! API route configuration.

use crate::api::handlers::{
    delete_all_handler, health_handler, metrics_handler, redirect_handler, shorten_handler,
    view_all_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST   /shorten`      - Create a short link
/// - `GET    /metrics`      - Most shortened domains
/// - `GET    /viewAll`      - Every stored mapping
/// - `DELETE /deleteAll`    - Wipe all mappings and counts
/// - `GET    /health`       - Store connectivity check
/// - `GET    /{short_key}`  - Redirect to the original URL
///
/// Static segments take precedence over the `{short_key}` capture, so keys
/// never shadow the fixed endpoints.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/metrics", get(metrics_handler))
        .route("/viewAll", get(view_all_handler))
        .route("/deleteAll", delete(delete_all_handler))
        .route("/health", get(health_handler))
        .route("/{short_key}", get(redirect_handler))
}
