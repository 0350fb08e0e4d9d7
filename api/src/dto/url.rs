use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShortenUrlRequest {
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}

/// Query parameters for the GET variant of the shorten endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenUrlQuery {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlResponse {
    pub original_url: String,
    pub short_url: String,

    /// May be negative when the "short" URL is longer than the original
    pub characters_saved: i64,
}
