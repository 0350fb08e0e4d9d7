//! CORS middleware configuration for cross-origin requests.
//!
//! Origins come from the `ALLOWED_ORIGINS` environment variable. When none
//! are configured the policy is permissive, which is intended for
//! development only.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use sg_shared::config::CorsConfig;

/// Creates a CORS middleware instance for the configured origins
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.is_permissive() {
        log::info!("CORS: no origins configured, allowing any origin");

        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
    }

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    for origin in &config.allowed_origins {
        log::info!("CORS: allowing origin {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
