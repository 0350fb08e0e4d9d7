//! Auth server relay client

use reqwest::header;
use tracing::{info, warn};

use sg_shared::config::AuthServerConfig;

use crate::InfrastructureError;

/// Response relayed verbatim from the auth server
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    /// Upstream HTTP status code
    pub status: u16,
    /// Upstream response body, passed through untouched
    pub body: String,
}

/// Auth server connectivity as seen from the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthServerStatus {
    Healthy,
    Unhealthy,
    Unreachable(String),
}

/// HTTP client for the external auth server
#[derive(Clone)]
pub struct AuthServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthServerClient {
    /// Create a client for the configured auth server
    pub fn new(config: &AuthServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// The configured auth server base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward login credentials and relay the upstream response.
    ///
    /// Returns an error only when the auth server cannot be reached at the
    /// transport level; an upstream rejection (401 and friends) is a normal
    /// relayed response.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RelayedResponse, InfrastructureError> {
        let url = format!("{}/api/auth/user/login", self.base_url);
        let payload = serde_json::json!({
            "userId": username,
            "password": password,
        });

        let response = self
            .http
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("User {} logged in via auth server", username);
        } else {
            warn!("Login failed for user {} ({})", username, status);
        }

        let body = response.text().await?;

        Ok(RelayedResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// Probe the auth server's health endpoint. Never fails the caller.
    pub async fn health(&self) -> AuthServerStatus {
        let url = format!("{}/api/health", self.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => AuthServerStatus::Healthy,
            Ok(_) => AuthServerStatus::Unhealthy,
            Err(e) => AuthServerStatus::Unreachable(e.to_string()),
        }
    }
}
