//! SMS provider clients
//!
//! One client per delivery provider, all implementing the core
//! [`SmsProvider`](sg_core::services::sms::SmsProvider) trait:
//!
//! - [`AzureSmsProvider`]: Azure Communication Services (the default route)
//! - [`TwilioSmsProvider`]: Twilio Messages API (the alternate route)
//! - [`MockSmsProvider`]: console-only implementation for development and
//!   tests
//!
//! Which provider backs a request is decided by route wiring at startup;
//! both real clients are constructed once and live for the process.

pub mod azure;
pub mod mock_sms;
pub mod twilio;

// Re-export commonly used types
pub use azure::{AzureSmsConfig, AzureSmsProvider};
pub use mock_sms::MockSmsProvider;
pub use twilio::{TwilioConfig, TwilioSmsProvider};

#[cfg(test)]
mod tests;
