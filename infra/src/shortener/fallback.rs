//! Fallback URL shortener
//!
//! Tries TinyURL first, then is.gd, in that fixed order. An attempt counts
//! as successful only when the endpoint returns a non-empty body that
//! begins with `http`; transport errors are caught per attempt and do not
//! abort the chain.

use async_trait::async_trait;
use tracing::{info, warn};

use sg_core::domain::value_objects::ShortenOutcome;
use sg_core::services::shortener::UrlShortener;

use crate::InfrastructureError;

const TINYURL_ENDPOINT: &str = "https://tinyurl.com/api-create.php";
const ISGD_ENDPOINT: &str = "https://is.gd/create.php";

/// Whether an endpoint's response body is a usable short URL
fn is_short_url(response: &str) -> bool {
    let trimmed = response.trim();
    !trimmed.is_empty() && trimmed.starts_with("http")
}

/// URL shortener backed by free third-party endpoints
#[derive(Clone, Default)]
pub struct UrlShortenerService {
    http: reqwest::Client,
}

impl UrlShortenerService {
    /// Create a new shortener service
    pub fn new() -> Self {
        Self::default()
    }

    async fn fetch(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<String, InfrastructureError> {
        let response = self.http.get(endpoint).query(query).send().await?;
        Ok(response.text().await?)
    }

    async fn try_tinyurl(&self, long_url: &str) -> ShortenOutcome {
        match self.fetch(TINYURL_ENDPOINT, &[("url", long_url)]).await {
            Ok(body) if is_short_url(&body) => {
                info!("URL shortened via TinyURL: {} -> {}", long_url, body.trim());
                ShortenOutcome::shortened(body.trim())
            }
            Ok(_) => ShortenOutcome::failed("TinyURL returned invalid response"),
            Err(e) => {
                warn!("TinyURL failed: {}", e);
                ShortenOutcome::failed(e.to_string())
            }
        }
    }

    async fn try_isgd(&self, long_url: &str) -> ShortenOutcome {
        match self
            .fetch(ISGD_ENDPOINT, &[("format", "simple"), ("url", long_url)])
            .await
        {
            Ok(body) if is_short_url(&body) => {
                info!("URL shortened via is.gd: {} -> {}", long_url, body.trim());
                ShortenOutcome::shortened(body.trim())
            }
            Ok(_) => ShortenOutcome::failed("is.gd returned invalid response"),
            Err(e) => {
                warn!("is.gd failed: {}", e);
                ShortenOutcome::failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl UrlShortener for UrlShortenerService {
    async fn shorten(&self, long_url: &str) -> ShortenOutcome {
        let primary = self.try_tinyurl(long_url).await;
        if primary.success {
            return primary;
        }

        let secondary = self.try_isgd(long_url).await;
        if secondary.success {
            return secondary;
        }

        ShortenOutcome::failed("All URL shortening services failed")
    }
}
