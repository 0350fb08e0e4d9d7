//! Server and CORS configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Load server settings from `SERVER_HOST` / `SERVER_PORT`
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| String::from("0.0.0.0"));
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                reason: format!("not a valid port number: {}", raw),
            })?,
            Err(_) => 8080,
        };

        Ok(Self { host, port })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; an empty list selects a permissive development policy
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Load allowed origins from the comma-separated `ALLOWED_ORIGINS` variable
    pub fn from_env() -> Self {
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self { allowed_origins }
    }

    /// Whether no origins were configured and any origin should be allowed
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_config_invalid_port() {
        std::env::set_var("SERVER_PORT", "not-a-port");
        let result = ServerConfig::from_env();
        std::env::remove_var("SERVER_PORT");

        assert!(result.is_err());
    }

    #[test]
    fn test_cors_config_from_env() {
        std::env::set_var("ALLOWED_ORIGINS", "https://app.example.com, https://admin.example.com");
        let config = CorsConfig::from_env();
        std::env::remove_var("ALLOWED_ORIGINS");

        assert_eq!(
            config.allowed_origins,
            vec!["https://app.example.com", "https://admin.example.com"]
        );
        assert!(!config.is_permissive());
        assert!(CorsConfig::default().is_permissive());
    }
}
