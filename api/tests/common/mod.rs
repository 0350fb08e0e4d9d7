//! Shared helpers for handler tests

use std::sync::Arc;

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use sg_api::app::AppServices;
use sg_core::services::dispatch::SmsDispatcher;
use sg_core::services::shortener::UrlShortener;
use sg_core::services::sms::SmsProvider;
use sg_infra::auth::AuthServerClient;
use sg_shared::config::{AuthServerConfig, JwtConfig};

/// JWT settings shared by the test app and the issued tokens
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-signing-secret".to_string(),
        issuer: "auth-server".to_string(),
        audience: "sms-gateway".to_string(),
    }
}

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    #[serde(rename = "companyId", skip_serializing_if = "Option::is_none")]
    company_id: Option<&'a str>,
    exp: i64,
    iss: &'a str,
    aud: &'a str,
}

/// Issue a token the gateway's middleware accepts
pub fn bearer_token(company_id: Option<&str>) -> String {
    let config = test_jwt_config();
    let claims = TestClaims {
        sub: "user-1",
        company_id,
        exp: chrono::Utc::now().timestamp() + 3600,
        iss: &config.issuer,
        aud: &config.audience,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(&config.key_bytes()),
    )
    .unwrap()
}

/// Client pointed at a port nothing listens on, for the 503 paths
pub fn unreachable_auth_client() -> AuthServerClient {
    AuthServerClient::new(&AuthServerConfig {
        base_url: "http://127.0.0.1:9".to_string(),
    })
}

/// Assemble app services around the given doubles
pub fn services_with(
    default_provider: Arc<dyn SmsProvider>,
    alternate_provider: Arc<dyn SmsProvider>,
    shortener: Arc<dyn UrlShortener>,
) -> AppServices {
    AppServices {
        default_sms: Arc::new(SmsDispatcher::new(default_provider, shortener.clone())),
        twilio_sms: Arc::new(SmsDispatcher::new(alternate_provider, shortener.clone())),
        shortener,
        auth_client: unreachable_auth_client(),
    }
}
