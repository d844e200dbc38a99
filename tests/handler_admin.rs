mod common;

use axum_test::TestServer;
use serde_json::json;
use trade_in_pricing::routes::test_router;

async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/admin/login")
        .json(&json!({ "password": common::ADMIN_PASSWORD }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()["session_id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_settings_require_session() {
    let ctx = common::create_test_context();
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();

    let response = server.get("/api/admin/settings").await;
    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");

    let response = server
        .get("/api/admin/settings")
        .authorization_bearer("not-a-session")
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let ctx = common::create_test_context();
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();

    let response = server
        .post("/api/admin/login")
        .json(&json!({ "password": "guess" }))
        .await;

    response.assert_status_unauthorized();
    assert!(response.json::<serde_json::Value>().get("session_id").is_none());
}

#[tokio::test]
async fn test_get_settings() {
    let ctx = common::create_test_context();
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();
    let session_id = login(&server).await;

    let response = server
        .get("/api/admin/settings")
        .authorization_bearer(&session_id)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["margin"]["type"], "percentage");
    assert_eq!(json["margin"]["value"], 20.0);
    assert_eq!(json["service_charge"], 0.0);
}

#[tokio::test]
async fn test_update_settings_changes_offers() {
    let ctx = common::create_test_context();
    ctx.sales.add("1HGCM82633A004301", 2003, "HOND", 5000.0).await;
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();
    let session_id = login(&server).await;

    let response = server
        .put("/api/admin/settings")
        .authorization_bearer(&session_id)
        .json(&json!({
            "margin": { "type": "fixed", "value": 750.0 },
            "service_charge": 150.0
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["margin"]["type"], "fixed");

    let quote = server
        .post("/api/pricing/lookup")
        .json(&json!({ "vin": "1HGCM82633A004352", "year": 2003 }))
        .await;

    quote.assert_status_ok();
    let json = quote.json::<serde_json::Value>();
    assert_eq!(json["raw_price"], 5000);
    assert_eq!(json["price"], 4100);
}

#[tokio::test]
async fn test_update_settings_rejects_invalid_margin() {
    let ctx = common::create_test_context();
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();
    let session_id = login(&server).await;

    let response = server
        .put("/api/admin/settings")
        .authorization_bearer(&session_id)
        .json(&json!({ "margin": { "type": "percentage", "value": 140.0 } }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .put("/api/admin/settings")
        .authorization_bearer(&session_id)
        .json(&json!({
            "margin": { "type": "fixed", "value": 100.0 },
            "service_charge": -1.0
        }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_sales_count() {
    let ctx = common::create_test_context();
    ctx.sales.add("1HGCM82633A004301", 2003, "HOND", 5000.0).await;
    ctx.sales.add("1HGCM82633A004302", 2003, "HOND", 5100.0).await;
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();
    let session_id = login(&server).await;

    let response = server
        .get("/api/admin/sales/count")
        .authorization_bearer(&session_id)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["total"], 2);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let ctx = common::create_test_context();
    let server = TestServer::new(test_router(ctx.state.clone())).unwrap();
    let session_id = login(&server).await;

    server
        .post("/api/admin/logout")
        .authorization_bearer(&session_id)
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .get("/api/admin/settings")
        .authorization_bearer(&session_id)
        .await
        .assert_status_unauthorized();
}
