//! Handler tests for the URL shortening routes

mod common;

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::json;

use sg_api::app::create_app;
use sg_infra::shortener::MockUrlShortener;
use sg_infra::sms::MockSmsProvider;
use sg_shared::config::CorsConfig;

use common::{bearer_token, services_with, test_jwt_config};

fn shorten_services(shortener: MockUrlShortener) -> sg_api::app::AppServices {
    services_with(
        Arc::new(MockSmsProvider::new()),
        Arc::new(MockSmsProvider::new()),
        Arc::new(shortener),
    )
}

#[actix_web::test]
async fn shorten_requires_bearer_token() {
    let services = shorten_services(MockUrlShortener::succeeding("https://tinyurl.com/abc"));
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let req = test::TestRequest::get()
        .uri("/api/url/shorten?url=https://example.com")
        .to_request();

    match test::try_call_service(&app, req).await {
        Ok(resp) => assert_eq!(resp.status(), StatusCode::UNAUTHORIZED),
        Err(err) => assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        ),
    }
}

#[actix_web::test]
async fn shorten_get_rejects_missing_url() {
    let services = shorten_services(MockUrlShortener::succeeding("https://tinyurl.com/abc"));
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let req = test::TestRequest::get()
        .uri("/api/url/shorten")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", bearer_token(None)),
        ))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "URL is required");
}

#[actix_web::test]
async fn shorten_rejects_relative_url() {
    let services = shorten_services(MockUrlShortener::succeeding("https://tinyurl.com/abc"));
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let req = test::TestRequest::post()
        .uri("/api/url/shorten")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", bearer_token(None)),
        ))
        .set_json(json!({"url": "not-a-url"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid URL format");
}

#[actix_web::test]
async fn shorten_post_returns_characters_saved() {
    let services = shorten_services(MockUrlShortener::succeeding("https://tiny.one/abc"));
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let original = "https://example.com/a/rather/long/path/to/a/page";
    let req = test::TestRequest::post()
        .uri("/api/url/shorten")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", bearer_token(None)),
        ))
        .set_json(json!({ "url": original }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let data = &body["data"];

    assert_eq!(data["originalUrl"], original);
    assert_eq!(data["shortUrl"], "https://tiny.one/abc");
    assert_eq!(
        data["charactersSaved"].as_i64().unwrap(),
        original.len() as i64 - "https://tiny.one/abc".len() as i64
    );
}

#[actix_web::test]
async fn shorten_surfaces_aggregate_failure_as_500() {
    let services = shorten_services(MockUrlShortener::failing());
    let app =
        test::init_service(create_app(&services, &test_jwt_config(), &CorsConfig::default()))
            .await;

    let req = test::TestRequest::post()
        .uri("/api/url/shorten")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", bearer_token(None)),
        ))
        .set_json(json!({"url": "https://example.com"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Failed to shorten URL: All URL shortening services failed"
    );
}
