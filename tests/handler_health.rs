mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use character_service::AppState;
use character_service::api::handlers::health_handler;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = make_server(common::create_test_state(vec![
        common::john(),
        common::jane(),
    ]));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["repository"]["status"], "ok");
    assert_eq!(
        json["checks"]["repository"]["message"],
        "Characters stored: 2"
    );
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = make_server(common::create_test_state(Vec::new()));

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("repository").is_some());
}
