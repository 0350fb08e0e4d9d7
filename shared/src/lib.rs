//! Shared utilities and common types for the SmsGate server
//!
//! This crate provides common functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - The API response envelope
//! - Phone number utilities (normalization, E.164 shape checks)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthServerConfig, ConfigError, CorsConfig, JwtConfig, ServerConfig};
pub use types::ApiResponse;
pub use utils::phone;
