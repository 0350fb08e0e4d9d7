//! URL shortener capability

use async_trait::async_trait;

use crate::domain::value_objects::ShortenOutcome;

/// URL shortening capability.
///
/// Like [`crate::services::sms::SmsProvider`], failures are encoded in the
/// returned outcome rather than raised; callers decide whether a failed
/// shortening is fatal (for the dispatch facade it never is).
#[async_trait]
pub trait UrlShortener: Send + Sync {
    /// Shorten a URL
    async fn shorten(&self, long_url: &str) -> ShortenOutcome;
}
