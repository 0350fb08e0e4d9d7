//! Dispatch facade
//!
//! Composes one [`SmsProvider`](crate::services::sms::SmsProvider) with the
//! URL shortener. Two dispatcher instances exist per process, one per
//! provider variant, bound to route scopes at startup; the facade itself
//! adds no delivery logic.

pub mod service;

pub use service::SmsDispatcher;

#[cfg(test)]
mod tests;
