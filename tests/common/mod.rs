#![allow(dead_code)]

use axum_test::TestServer;
use hashlink::application::services::{ResetScope, ShortenerService};
use hashlink::domain::store::KeyValueStore;
use hashlink::infrastructure::store::MemoryStore;
use hashlink::routes::router;
use hashlink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://s.test.com";

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    create_test_state_with_scope(store, ResetScope::Database)
}

pub fn create_test_state_with_scope(store: Arc<MemoryStore>, scope: ResetScope) -> AppState {
    let store: Arc<dyn KeyValueStore> = store;
    let shortener = ShortenerService::new(store).with_reset_scope(scope);
    AppState::new(Arc::new(shortener))
}

/// Builds a server over a fresh in-memory store and returns both.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = TestServer::new(router(create_test_state(store.clone()))).unwrap();
    (server, store)
}

/// Shortens `url` and returns the key from the response.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/shorten")
        .json(&serde_json::json!({ "originalURL": url }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    json["short_url"].as_str().unwrap().to_string()
}
