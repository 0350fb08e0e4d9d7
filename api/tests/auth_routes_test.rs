//! Handler tests for the auth relay and health routes

mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use sg_api::app::create_app;
use sg_infra::shortener::MockUrlShortener;
use sg_infra::sms::MockSmsProvider;
use sg_shared::config::CorsConfig;

use common::{services_with, test_jwt_config};

fn services() -> sg_api::app::AppServices {
    // The auth client points at a closed port; see common::unreachable_auth_client
    services_with(
        Arc::new(MockSmsProvider::new()),
        Arc::new(MockSmsProvider::new()),
        Arc::new(MockUrlShortener::failing()),
    )
}

#[actix_web::test]
async fn login_returns_503_when_auth_server_unreachable() {
    let services = services();
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "operator", "password": "hunter2"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Authentication service unavailable");
}

#[actix_web::test]
async fn login_rejects_missing_credentials() {
    let services = services();
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "", "password": ""}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn auth_health_never_fails() {
    let services = services();
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let req = test::TestRequest::get().uri("/api/auth/health").to_request();
    let resp = test::call_service(&app, req).await;

    // The auth server is unreachable, yet the endpoint reports 200
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["smsService"], "healthy");
    assert_eq!(body["authServer"], "unreachable");
    assert!(body["error"].as_str().is_some());
    assert_eq!(body["authServerUrl"], "http://127.0.0.1:9");
}

#[actix_web::test]
async fn gateway_health_endpoint() {
    let services = services();
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "sms-gateway");
}
