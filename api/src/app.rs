//! Application state and factory
//!
//! Assembles the actix-web application: middleware, route scopes, and the
//! per-scope dispatcher bindings that give each SMS route family its
//! provider.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use sg_core::services::dispatch::SmsDispatcher;
use sg_core::services::shortener::UrlShortener;
use sg_infra::auth::AuthServerClient;
use sg_shared::config::{CorsConfig, JwtConfig};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes;

/// Shared service instances the application is assembled from
#[derive(Clone)]
pub struct AppServices {
    /// Dispatcher backing the default `/api/sms` scope
    pub default_sms: Arc<SmsDispatcher>,

    /// Dispatcher backing the alternate `/twilio/sms` scope
    pub twilio_sms: Arc<SmsDispatcher>,

    /// Shortener behind `/api/url/shorten`
    pub shortener: Arc<dyn UrlShortener>,

    /// Relay client for the external auth server
    pub auth_client: AuthServerClient,
}

/// Create and configure the application.
///
/// The two SMS scopes register their own dispatcher as scope-level data, so
/// the same handlers resolve to different providers purely by route path.
/// This binding is fixed for the life of the process.
pub fn create_app(
    services: &AppServices,
    jwt: &JwtConfig,
    cors_config: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = create_cors(cors_config);
    let auth = JwtAuth::new(jwt);

    App::new()
        .wrap(Logger::default())
        .wrap(cors)
        // Gateway health endpoint
        .route("/health", web::get().to(health_check))
        // Anonymous auth relay routes
        .app_data(web::Data::new(services.auth_client.clone()))
        .service(
            web::scope("/api/auth")
                .route("/login", web::post().to(routes::auth::login))
                .route("/health", web::get().to(routes::auth::health)),
        )
        // SMS routes, default provider
        .service(
            web::scope("/api/sms")
                .wrap(auth.clone())
                .app_data(web::Data::from(services.default_sms.clone()))
                .route("/send", web::post().to(routes::sms::send_sms))
                .route("/send-with-link", web::post().to(routes::sms::send_sms_with_link))
                .route("/send-bulk", web::post().to(routes::sms::send_bulk_sms)),
        )
        // SMS routes, alternate provider
        .service(
            web::scope("/twilio/sms")
                .wrap(auth.clone())
                .app_data(web::Data::from(services.twilio_sms.clone()))
                .route("/send", web::post().to(routes::sms::send_sms))
                .route("/send-with-link", web::post().to(routes::sms::send_sms_with_link))
                .route("/send-bulk", web::post().to(routes::sms::send_bulk_sms)),
        )
        // URL shortening
        .service(
            web::scope("/api/url")
                .wrap(auth)
                .app_data(web::Data::from(services.shortener.clone()))
                .service(
                    web::resource("/shorten")
                        .route(web::get().to(routes::url::shorten_url_get))
                        .route(web::post().to(routes::url::shorten_url_post)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sms-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
