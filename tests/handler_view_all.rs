mod common;

use hashlink::domain::store::KeyValueStore;

#[tokio::test]
async fn test_view_all_empty() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/viewAll").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({})
    );
}

#[tokio::test]
async fn test_view_all_lists_every_mapping_across_pages() {
    let (server, _store) = common::create_test_server();

    let urls: Vec<String> = (0..25)
        .map(|i| format!("https://site{i}.example.org/path/{i}"))
        .collect();

    let mut keys = Vec::new();
    for url in &urls {
        keys.push(common::shorten(&server, url).await);
    }

    let json = server.get("/viewAll").await.json::<serde_json::Value>();
    let mappings = json.as_object().unwrap();

    assert_eq!(mappings.len(), urls.len());

    for (key, url) in keys.iter().zip(&urls) {
        assert_eq!(mappings[&format!("url:{key}")], url.as_str());

        let response = server.get(&format!("/{key}")).await;
        assert_eq!(response.header("location"), url.as_str());
    }
}

#[tokio::test]
async fn test_view_all_ignores_other_keys() {
    let (server, store) = common::create_test_server();

    common::shorten(&server, "https://example.com/page").await;
    store.set("session:abc", "other service").await.unwrap();

    let json = server.get("/viewAll").await.json::<serde_json::Value>();

    assert_eq!(
        json,
        serde_json::json!({ "url:3641c5f2": "https://example.com/page" })
    );
}
