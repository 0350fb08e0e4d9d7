//! Authentication configuration
//!
//! JWT validation parameters and the external auth server location.

use base64::Engine;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// JWT bearer validation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared signing key, delivered either base64- or UTF-8-encoded
    pub secret: String,

    /// Expected issuer claim
    pub issuer: String,

    /// Expected audience claim
    pub audience: String,
}

impl JwtConfig {
    /// Load JWT settings from `JWT_SECRET` / `JWT_ISSUER` / `JWT_AUDIENCE`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: super::require("JWT_SECRET")?,
            issuer: super::require("JWT_ISSUER")?,
            audience: super::require("JWT_AUDIENCE")?,
        })
    }

    /// Raw key bytes for HS256 verification.
    ///
    /// The configured secret is tried as base64 first, falling back to its
    /// UTF-8 bytes, matching how the issuing auth server delivers the key.
    pub fn key_bytes(&self) -> Vec<u8> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.secret)
            .unwrap_or_else(|_| self.secret.as_bytes().to_vec())
    }
}

/// External auth server location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthServerConfig {
    /// Base URL of the auth server, e.g. `http://auth.internal:5000`
    pub base_url: String,
}

impl AuthServerConfig {
    /// Load the auth server base URL from `AUTH_SERVER_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = super::require("AUTH_SERVER_URL")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}
