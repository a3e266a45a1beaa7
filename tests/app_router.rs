mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use axum_test::TestServer;
use character_service::config::Config;
use character_service::routes::app_router;
use character_service::state::DEFAULT_BODY_LIMIT;
use std::net::SocketAddr;

fn config(rate_limit_per_second: u64, rate_limit_burst: u32) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        body_limit_bytes: DEFAULT_BODY_LIMIT,
        seed_path: None,
        rate_limit_per_second,
        rate_limit_burst,
    }
}

/// Serves the full application router over a real socket, as `server::run` does.
fn make_server(rate_limit_per_second: u64, rate_limit_burst: u32) -> TestServer {
    let state = common::create_test_state(vec![common::john(), common::jane()]);
    let router = app_router(state, &config(rate_limit_per_second, rate_limit_burst)).unwrap();
    let app = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(router);

    TestServer::builder().http_transport().build(app).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_normalised() {
    let server = make_server(2, 100);

    let response = server.get("/api/characters/").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    server.get("/api/characters/1/").await.assert_status_ok();
}

#[tokio::test]
async fn test_health_is_served_next_to_api() {
    let server = make_server(2, 100);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(
        json["checks"]["repository"]["message"],
        "Characters stored: 2"
    );
}

#[tokio::test]
async fn test_api_is_rate_limited_after_burst() {
    let server = make_server(1, 2);

    server.get("/api/characters").await.assert_status_ok();
    server.get("/api/characters/2").await.assert_status_ok();

    server
        .get("/api/characters")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let server = make_server(1, 1);

    server.get("/api/characters").await.assert_status_ok();
    server
        .get("/api/characters")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    server.get("/health").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_create_through_full_stack() {
    let server = make_server(2, 100);

    let response = server
        .post("/api/characters/")
        .json(&serde_json::json!({ "name": "Luke", "id": "3", "isAdmin": true }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["name"], "Luke");
    assert!(json["data"].get("isAdmin").is_none());

    server.get("/api/characters/3").await.assert_status_ok();
}
