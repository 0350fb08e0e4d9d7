use std::sync::Arc;

use actix_web::HttpServer;
use log::{error, info};

use sg_api::app::{create_app, AppServices};
use sg_core::services::dispatch::SmsDispatcher;
use sg_core::services::shortener::UrlShortener;
use sg_infra::auth::AuthServerClient;
use sg_infra::shortener::UrlShortenerService;
use sg_infra::sms::{AzureSmsProvider, TwilioSmsProvider};
use sg_shared::config::AppConfig;

/// Startup problems are fatal; the server must not come up half-configured
fn fatal(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SmsGate API server");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        fatal(e)
    })?;

    info!("JWT issuer: {}", config.jwt.issuer);
    info!("JWT audience: {}", config.jwt.audience);
    info!("Auth server: {}", config.auth_server.base_url);

    // Both providers are required at startup; missing credentials abort
    let azure = AzureSmsProvider::from_env().map_err(|e| {
        error!("Azure SMS configuration error: {}", e);
        fatal(e)
    })?;
    let twilio = TwilioSmsProvider::from_env().map_err(|e| {
        error!("Twilio SMS configuration error: {}", e);
        fatal(e)
    })?;

    let shortener: Arc<dyn UrlShortener> = Arc::new(UrlShortenerService::new());

    let services = AppServices {
        default_sms: Arc::new(SmsDispatcher::new(Arc::new(azure), shortener.clone())),
        twilio_sms: Arc::new(SmsDispatcher::new(Arc::new(twilio), shortener.clone())),
        shortener,
        auth_client: AuthServerClient::new(&config.auth_server),
    };

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let jwt = config.jwt.clone();
    let cors = config.cors.clone();

    HttpServer::new(move || create_app(&services, &jwt, &cors))
        .bind(&bind_address)?
        .run()
        .await
}
