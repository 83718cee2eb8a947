//! Error types surfaced by the shortening engine.

use crate::domain::store::StoreError;

/// Errors returned by [`crate::application::services::ShortenerService`].
///
/// Every error is terminal for the current operation; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    /// The submitted URL could not be parsed into scheme, authority and path.
    #[error("failed to parse URL: {0}")]
    UrlParse(String),

    /// No mapping exists for the requested short key.
    #[error("short key not found: {0}")]
    NotFound(String),

    /// A store write (SET, ZINCRBY, flush or delete) failed.
    #[error("store write failed: {0}")]
    StoreWrite(#[source] StoreError),

    /// A store read (GET, range or scan) failed.
    #[error("store read failed: {0}")]
    StoreRead(#[source] StoreError),
}
