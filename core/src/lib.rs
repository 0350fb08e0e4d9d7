//! # Core domain layer
//!
//! Delivery outcome value objects, the provider capability traits, and the
//! dispatch facade that composes them. This crate performs no I/O of its
//! own: concrete provider clients live in the infra crate and are injected
//! through the [`SmsProvider`] and [`UrlShortener`] traits.

pub mod domain;
pub mod services;

// Re-export commonly used types
pub use domain::value_objects::{
    BulkItemOutcome, BulkSendReport, LinkSendOutcome, SendOutcome, ShortenOutcome,
};
pub use services::dispatch::SmsDispatcher;
pub use services::shortener::UrlShortener;
pub use services::sms::SmsProvider;
