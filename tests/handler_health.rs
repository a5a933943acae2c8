mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortly::api::handlers::{health_handler, health_status_handler, index_handler};

fn server(state: shortly::AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/health/status", get(health_status_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (state, _store) = common::create_test_state();
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "status": "healthy" })
    );
}

#[tokio::test]
async fn test_health_status_structure() {
    let (state, _store) = common::create_test_state();
    let server = server(state);

    let response = server.get("/health/status").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["routes"], "up");

    let uptime = json["uptime"].as_str().unwrap();
    assert!(uptime.starts_with("0:00:"), "unexpected uptime {uptime}");
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let (state, _store) = common::create_test_state();
    let server = server(state);

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["message"].is_string());
    assert_eq!(json["endpoints"]["shorten_url"], "/shorten");
    assert_eq!(json["endpoints"]["analytics"], "/{short_id}/analytics");
    assert_eq!(json["endpoints"]["generate_qr"], "/{short_id}/qr");
}
