mod common;

use serde_json::json;

#[tokio::test]
async fn test_stats_empty() {
    let (server, _) = common::create_test_server();

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body,
        json!({ "total_urls": 0, "active_urls": 0, "total_clicks": 0 })
    );
}

#[tokio::test]
async fn test_stats_after_activity() {
    let (server, _) = common::create_test_server();

    for code in ["a1", "b2", "c3"] {
        server
            .post("/shorten")
            .json(&json!({ "url": "https://example.com", "custom_code": code }))
            .await
            .assert_status_ok();
    }

    server.get("/a1").await;
    server.get("/a1").await;
    server.get("/b2").await;
    server.post("/api/links/c3/deactivate").await;

    let body = server.get("/api/stats").await.json::<serde_json::Value>();

    assert_eq!(body["total_urls"], 3);
    assert_eq!(body["active_urls"], 2);
    assert_eq!(body["total_clicks"], 3);
}

#[tokio::test]
async fn test_health_check() {
    let (server, _) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["status"], "ok");
    assert_eq!(body["checks"]["storage"]["message"], "memory backend reachable");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_service_info() {
    let (server, _) = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "short-url");
    assert_eq!(body["base_url"], "https://sho.rt");
    assert_eq!(body["storage"], "memory");
}
