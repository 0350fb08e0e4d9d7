//! # Infrastructure layer
//!
//! Concrete clients for the external services the gateway fronts:
//!
//! - **SMS**: delivery provider clients (Azure Communication Services,
//!   Twilio) plus a mock implementation for development and tests
//! - **Shortener**: the TinyURL / is.gd fallback chain
//! - **Auth**: the relay client for the external auth server
//!
//! Everything here speaks HTTP via reqwest. Provider implementations catch
//! transport errors at the boundary and convert them into outcome values;
//! nothing in this crate panics on an upstream failure.

pub mod auth;
pub mod shortener;
pub mod sms;

use thiserror::Error;

/// Infrastructure-specific error types
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request/response encoding error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
