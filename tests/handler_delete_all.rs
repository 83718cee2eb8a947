mod common;

use axum_test::TestServer;
use hashlink::application::services::ResetScope;
use hashlink::domain::store::KeyValueStore;
use hashlink::infrastructure::store::MemoryStore;
use hashlink::routes::router;
use std::sync::Arc;

#[tokio::test]
async fn test_delete_all_clears_everything() {
    let (server, store) = common::create_test_server();

    common::shorten(&server, "https://a.com/1").await;
    common::shorten(&server, "https://b.com/x").await;
    store.set("session:abc", "other service").await.unwrap();

    let response = server.delete("/deleteAll").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "All records have been deleted."
    );

    assert!(store.is_empty());

    let all = server.get("/viewAll").await.json::<serde_json::Value>();
    assert_eq!(all, serde_json::json!({}));

    let metrics = server.get("/metrics").await.json::<serde_json::Value>();
    assert_eq!(metrics["top_domains"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_all_namespace_scope_keeps_foreign_keys() {
    let store = Arc::new(MemoryStore::new());
    let state = common::create_test_state_with_scope(store.clone(), ResetScope::Namespace);
    let server = TestServer::new(router(state)).unwrap();

    common::shorten(&server, "https://a.com/1").await;
    store.set("session:abc", "other service").await.unwrap();

    server.delete("/deleteAll").await.assert_status_ok();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("session:abc").await.unwrap(), "other service");

    let all = server.get("/viewAll").await.json::<serde_json::Value>();
    assert_eq!(all, serde_json::json!({}));
}

#[tokio::test]
async fn test_delete_all_wrong_method() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/deleteAll").await;

    assert_eq!(response.status_code(), 405);
}
