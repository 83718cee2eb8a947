mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use hashlink::domain::entities::ScoredMember;
use hashlink::domain::store::{KeyValueStore, ScanPage, StoreError};
use hashlink::infrastructure::store::MemoryStore;
use hashlink::routes::router;
use hashlink::state::AppState;
use std::sync::Arc;

/// In-memory store whose PING always fails.
struct UnreachableStore(MemoryStore);

#[async_trait]
impl KeyValueStore for UnreachableStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.set(key, value).await
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        self.0.get(key).await
    }

    async fn zincr_by(&self, set: &str, delta: f64, member: &str) -> Result<(), StoreError> {
        self.0.zincr_by(set, delta, member).await
    }

    async fn zrev_range_with_scores(
        &self,
        set: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<ScoredMember>, StoreError> {
        self.0.zrev_range_with_scores(set, start, stop).await
    }

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<ScanPage, StoreError> {
        self.0.scan(cursor, pattern, count).await
    }

    async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
        self.0.delete(keys).await
    }

    async fn flush_all(&self) -> Result<(), StoreError> {
        self.0.flush_all().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_store_unreachable() {
    let state = AppState::with_store(Arc::new(UnreachableStore(MemoryStore::new())));
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
    assert_eq!(json["checks"]["store"]["message"], "Store ping failed");
}
