//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::application::services::shortener_service::DEFAULT_TOP_DOMAINS;
use crate::domain::store::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Public base URL prepended to short keys in shorten responses.
    /// `None` returns the bare key.
    pub base_url: Option<String>,
    /// Number of entries reported by `GET /metrics`.
    pub top_domains_limit: usize,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self {
            shortener,
            base_url: None,
            top_domains_limit: DEFAULT_TOP_DOMAINS,
        }
    }

    /// Builds state around a store with the default reset scope.
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(Arc::new(ShortenerService::new(store)))
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_top_domains_limit(mut self, limit: usize) -> Self {
        self.top_domains_limit = limit;
        self
    }
}
