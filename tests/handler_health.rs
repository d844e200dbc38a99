mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use trade_in_pricing::routes::test_router;

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = common::create_test_context();
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let ctx = common::create_test_context();
    ctx.sales.fail();
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
}
