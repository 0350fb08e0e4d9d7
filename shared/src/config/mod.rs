//! Configuration management
//!
//! All configuration is sourced from environment variables. Required values
//! missing at startup surface as a [`ConfigError`], which is fatal: the
//! process must not begin serving traffic with an incomplete configuration.

pub mod auth;
pub mod server;

pub use auth::{AuthServerConfig, JwtConfig};
pub use server::{CorsConfig, ServerConfig};

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("{0} not configured")]
    Missing(&'static str),

    /// An environment variable is present but unusable
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub auth_server: AuthServerConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load the full application configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            auth_server: AuthServerConfig::from_env()?,
            cors: CorsConfig::from_env(),
        })
    }
}

/// Read a required environment variable
pub(crate) fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
