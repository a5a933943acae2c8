mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortly::api::handlers::qr_handler;
use shortly::domain::store::LinkStore;

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn server(state: shortly::AppState) -> TestServer {
    let app = Router::new()
        .route("/{short_id}/qr", get(qr_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_qr_returns_png() {
    let (state, store) = common::create_test_state();
    let code = common::seed_link(&store, "https://example.com");
    let server = server(state);

    let response = server.get(&format!("/{code}/qr")).await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert!(response.as_bytes().starts_with(PNG_SIGNATURE));
}

#[tokio::test]
async fn test_qr_does_not_count_click() {
    let (state, store) = common::create_test_state();
    let code = common::seed_link(&store, "https://example.com");
    let server = server(state);

    server.get(&format!("/{code}/qr")).await.assert_status_ok();

    assert_eq!(store.clicks(&code), Ok(0));
}

#[tokio::test]
async fn test_qr_not_found() {
    let (state, _store) = common::create_test_state();
    let server = server(state);

    server.get("/doesnotexist/qr").await.assert_status_not_found();
}
