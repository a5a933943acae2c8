mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortly::api::handlers::shorten_handler;
use shortly::domain::store::LinkStore;
use std::collections::HashSet;

fn server(state: shortly::AppState) -> TestServer {
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let (state, store) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    assert!(short_url.starts_with('/'));

    let code = &short_url[1..];
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(store.resolve(code).unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_shorten_uses_generated_code() {
    let (state, _store) =
        common::create_test_state_with(Box::new(common::FixedGenerator::new(vec!["a1b2c3"])), 3);
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "short_url": "/a1b2c3" })
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_codes() {
    let (state, store) = common::create_test_state();
    let server = server(state);

    let mut codes = HashSet::new();
    for _ in 0..2 {
        let response = server
            .post("/shorten")
            .json(&json!({ "url": "https://example.com" }))
            .await;
        response.assert_status_ok();
        codes.insert(response.json::<serde_json::Value>()["short_url"].to_string());
    }

    assert_eq!(codes.len(), 2);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, store) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let (state, store) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "ftp://example.com/file.txt" }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (state, _store) = common::create_test_state();
    let server = server(state);

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let (state, _store) = common::create_test_state();
    let server = server(state);

    let response = server.post("/shorten").text("{\"url\": ").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_capacity_exceeded() {
    let (state, store) =
        common::create_test_state_with(Box::new(common::FixedGenerator::new(vec!["aaaaaa"])), 4);
    let server = server(state);

    server
        .post("/shorten")
        .json(&json!({ "url": "https://first.example" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://second.example" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["details"]["attempts"], 4);

    assert_eq!(store.len(), 1);
    assert_eq!(store.resolve("aaaaaa").unwrap(), "https://first.example");
}
