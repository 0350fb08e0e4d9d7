//! Mock URL shortener for handler tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use sg_core::domain::value_objects::ShortenOutcome;
use sg_core::services::shortener::UrlShortener;

/// Shortener double with a fixed outcome and a call counter
#[derive(Clone)]
pub struct MockUrlShortener {
    outcome: ShortenOutcome,
    calls: Arc<AtomicUsize>,
}

impl MockUrlShortener {
    /// Always shorten to the given URL
    pub fn succeeding(short_url: &str) -> Self {
        Self {
            outcome: ShortenOutcome::shortened(short_url),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always report the aggregate shortening failure
    pub fn failing() -> Self {
        Self {
            outcome: ShortenOutcome::failed("All URL shortening services failed"),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `shorten` was called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlShortener for MockUrlShortener {
    async fn shorten(&self, _long_url: &str) -> ShortenOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
