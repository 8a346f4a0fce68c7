mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_shorten_generated_code() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let code = body["short_code"].as_str().unwrap();

    assert_eq!(code.len(), 7);
    assert_eq!(body["original_url"], "https://example.com/page");
    assert_eq!(body["short_url"], format!("https://sho.rt/{code}"));
    assert!(body["expires_at"].is_null());
}

#[tokio::test]
async fn test_shorten_custom_code_with_expiry() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "demo",
            "expires_hours": 24
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_code"], "demo");
    assert_eq!(body["short_url"], "https://sho.rt/demo");
    assert_eq!(body["expires_at"], "2025-01-02T00:00:00Z");
}

#[tokio::test]
async fn test_shorten_duplicate_custom_code() {
    let (server, _) = common::create_test_server();

    server
        .post("/shorten")
        .json(&json!({ "url": "https://first.com", "custom_code": "taken" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://second.com", "custom_code": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["details"]["code"], "taken");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_invalid_custom_code() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "no spaces" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_custom_code_too_long() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "a".repeat(51) }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_reserved_code() {
    let (server, _) = common::create_test_server();

    for code in ["health", "shorten", "info", "api"] {
        let response = server
            .post("/shorten")
            .json(&json!({ "url": "https://example.com", "custom_code": code }))
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_shorten_non_positive_expiry() {
    let (server, _) = common::create_test_server();

    for hours in [0, -1] {
        let response = server
            .post("/shorten")
            .json(&json!({ "url": "https://example.com", "expires_hours": hours }))
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "custom_code": "abc" }))
        .await;

    assert!(response.status_code().is_client_error());
}
