mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use hashlink::infrastructure::store::MemoryStore;
use hashlink::routes::app_router;
use std::sync::Arc;
use tower::ServiceExt;

fn shorten_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"originalURL":"https://example.com/page"}"#))
        .unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let store = Arc::new(MemoryStore::new());
    let app = app_router(common::create_test_state(store.clone()));

    let response = app.oneshot(shorten_request("/shorten/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_static_routes_win_over_short_keys() {
    let store = Arc::new(MemoryStore::new());
    let app = app_router(common::create_test_state(store));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_redirect_through_full_stack() {
    let store = Arc::new(MemoryStore::new());
    let state = common::create_test_state(store);

    app_router(state.clone())
        .oneshot(shorten_request("/shorten"))
        .await
        .unwrap();

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/3641c5f2/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/page"
    );
}
