//! # hashlink
//!
//! A deterministic URL shortening service built with Axum and Redis.
//!
//! Short keys are the first 8 hex characters of the SHA-256 digest of the
//! submitted URL, so shortening is idempotent and needs no ID allocation.
//! Every shorten also bumps a per-domain counter used for analytics.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short key derivation, store contract, errors
//! - **Application Layer** ([`application`]) - The shortening engine
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Store Layout
//!
//! - `url:<key>` → original URL (string, no expiry)
//! - `domains` → sorted set of hostname → shorten count
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//!
//! curl -X POST localhost:8080/shorten -d '{"originalURL":"https://example.com/page"}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResetScope, ShortenerService, short_url};
    pub use crate::domain::entities::ScoredMember;
    pub use crate::domain::store::{KeyValueStore, StoreError};
    pub use crate::domain::{ShortKey, ShortenerError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
