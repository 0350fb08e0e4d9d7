//! Auth relay routes
//!
//! The gateway is not an authentication authority. Login requests are
//! forwarded to the external auth server and its response is relayed
//! verbatim; only a transport-level failure is translated, into a 503.

use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use sg_infra::auth::{AuthServerClient, AuthServerStatus};
use sg_shared::types::ApiResponse;

use crate::dto::auth::LoginRequest;
use crate::routes::validation_error_response;

/// Handler for POST `/api/auth/login`
pub async fn login(
    client: web::Data<AuthServerClient>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match client.login(&request.username, &request.password).await {
        Ok(relayed) => {
            let status =
                StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::BAD_GATEWAY);

            HttpResponse::build(status)
                .content_type("application/json")
                .body(relayed.body)
        }
        Err(e) => {
            log::error!("Auth server unavailable: {}", e);

            HttpResponse::ServiceUnavailable()
                .json(ApiResponse::<()>::error("Authentication service unavailable"))
        }
    }
}

/// Handler for GET `/api/auth/health`.
///
/// Reports auth server connectivity without ever failing itself.
pub async fn health(client: web::Data<AuthServerClient>) -> HttpResponse {
    let body = match client.health().await {
        AuthServerStatus::Healthy => serde_json::json!({
            "smsService": "healthy",
            "authServer": "healthy",
            "authServerUrl": client.base_url(),
        }),
        AuthServerStatus::Unhealthy => serde_json::json!({
            "smsService": "healthy",
            "authServer": "unhealthy",
            "authServerUrl": client.base_url(),
        }),
        AuthServerStatus::Unreachable(error) => serde_json::json!({
            "smsService": "healthy",
            "authServer": "unreachable",
            "authServerUrl": client.base_url(),
            "error": error,
        }),
    };

    HttpResponse::Ok().json(body)
}
