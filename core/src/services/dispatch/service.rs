//! Dispatch facade implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::value_objects::{
    BulkItemOutcome, BulkSendReport, LinkSendOutcome, SendOutcome, ShortenOutcome,
};
use crate::services::shortener::UrlShortener;
use crate::services::sms::SmsProvider;

/// Facade over one SMS provider and the URL shortener.
///
/// The provider instance is fixed at construction; every call routed to this
/// dispatcher, including every number of a bulk batch, goes through the same
/// provider.
pub struct SmsDispatcher {
    provider: Arc<dyn SmsProvider>,
    shortener: Arc<dyn UrlShortener>,
}

impl SmsDispatcher {
    /// Create a dispatcher closed over a provider and a shortener
    pub fn new(provider: Arc<dyn SmsProvider>, shortener: Arc<dyn UrlShortener>) -> Self {
        Self {
            provider,
            shortener,
        }
    }

    /// Name of the provider backing this dispatcher
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Send a single message
    pub async fn send_simple(
        &self,
        phone: &str,
        message: &str,
        company_id: Option<&str>,
    ) -> SendOutcome {
        self.provider.send(phone, message, company_id).await
    }

    /// Send a message carrying a link, optionally shortening it first.
    ///
    /// A shortening failure is never fatal: the original URL is kept, a
    /// warning is logged, and the send proceeds. The outbound text is
    /// `"{message} {url}"` when a non-empty message is supplied, else the
    /// URL alone.
    pub async fn send_with_link(
        &self,
        phone: &str,
        url: &str,
        message: Option<&str>,
        shorten: bool,
        company_id: Option<&str>,
    ) -> LinkSendOutcome {
        let mut sent_url = url.to_string();

        if shorten {
            match self.shortener.shorten(url).await {
                ShortenOutcome {
                    success: true,
                    short_url: Some(short),
                    ..
                } if !short.is_empty() => {
                    info!("URL shortened: {} -> {}", url, short);
                    sent_url = short;
                }
                other => {
                    warn!(
                        "Failed to shorten URL, using original: {}",
                        other.error.as_deref().unwrap_or("shortener returned no URL")
                    );
                }
            }
        }

        let message_sent = match message {
            Some(text) if !text.is_empty() => format!("{} {}", text, sent_url),
            _ => sent_url.clone(),
        };

        let outcome = self.provider.send(phone, &message_sent, company_id).await;

        LinkSendOutcome {
            outcome,
            original_url: url.to_string(),
            sent_url,
            message_sent,
        }
    }

    /// Send the same message to every recipient, sequentially and in input
    /// order, collecting one outcome per number.
    ///
    /// Individual failures never short-circuit the batch.
    pub async fn send_bulk(
        &self,
        phones: &[String],
        message: &str,
        company_id: Option<&str>,
    ) -> BulkSendReport {
        let mut results = Vec::with_capacity(phones.len());

        for phone in phones {
            let outcome = self.provider.send(phone, message, company_id).await;
            results.push(BulkItemOutcome {
                phone_number: phone.clone(),
                outcome,
            });
        }

        BulkSendReport::from_results(results)
    }
}
