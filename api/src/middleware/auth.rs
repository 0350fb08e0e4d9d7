//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the configured HS256 key, issuer, and audience, and injects an
//! [`AuthContext`] into request extensions for handlers to pick up. The
//! gateway only validates tokens; issuing them is the auth server's job.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use sg_shared::config::JwtConfig;

/// Claims the auth server puts in its tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(default)]
    pub sub: Option<String>,

    /// Alternate user identifier claim some tokens carry instead of `sub`
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,

    /// Tenant tag, carried through to audit logs
    #[serde(default, rename = "companyId")]
    pub company_id: Option<String>,

    /// Expiry as a unix timestamp
    pub exp: usize,
}

/// Caller identity injected into authenticated requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User identifier from the `sub` or `userId` claim
    pub user_id: Option<String>,

    /// Tenant tag from the `companyId` claim
    pub company_id: Option<String>,
}

impl AuthContext {
    fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub.or(claims.user_id),
            company_id: claims.company_id,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    /// Creates the middleware for the configured key, issuer, and audience
    pub fn new(config: &JwtConfig) -> Self {
        let key = DecodingKey::from_secret(&config.key_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        // No clock skew allowance, matching the issuing server
        validation.leeway = 0;

        Self { key, validation }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            key: self.key.clone(),
            validation: self.validation.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    key: DecodingKey,
    validation: Validation,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let key = self.key.clone();
        let validation = self.validation.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing or invalid Authorization header"));
                }
            };

            let token_data = decode::<Claims>(&token, &key, &validation)
                .map_err(|e| ErrorUnauthorized(format!("Token verification failed: {}", e)))?;

            req.extensions_mut()
                .insert(AuthContext::from_claims(token_data.claims));

            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
