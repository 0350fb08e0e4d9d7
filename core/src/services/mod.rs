//! Core services
//!
//! Capability traits for the interchangeable external services and the
//! dispatch facade that composes them.

pub mod dispatch;
pub mod shortener;
pub mod sms;

pub use dispatch::SmsDispatcher;
pub use shortener::UrlShortener;
pub use sms::SmsProvider;
