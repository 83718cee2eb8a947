mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_success() {
    let (server, _store) = common::create_test_server();

    let key = common::shorten(&server, "https://example.com/page").await;

    let response = server.get(&format!("/{key}")).await;

    assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[tokio::test]
async fn test_redirect_preserves_exact_url() {
    let (server, _store) = common::create_test_server();

    let url = "https://Example.com:8443/Path?q=1&r=2#frag";
    let key = common::shorten(&server, url).await;

    let response = server.get(&format!("/{key}")).await;

    assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/deadbeef").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["short_key"], "deadbeef");
}

#[tokio::test]
async fn test_redirect_after_delete_all() {
    let (server, _store) = common::create_test_server();

    let key = common::shorten(&server, "https://example.com/page").await;
    server.delete("/deleteAll").await.assert_status_ok();

    let response = server.get(&format!("/{key}")).await;

    response.assert_status_not_found();
}
