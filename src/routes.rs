//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`      - Create a short link
//! - `GET    /{short_key}`  - Redirect (301)
//! - `GET    /metrics`      - Top domains
//! - `GET    /viewAll`      - All mappings
//! - `DELETE /deleteAll`    - Reset
//! - `GET    /health`       - Store connectivity
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes with state and tracing applied, without path normalization.
///
/// Handy for tests that drive the router in-process.
pub fn router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
