use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_shorten() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    /// Recipient in any common format; normalized before dialing
    #[validate(length(min = 1, message = "phoneNumber is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendBulkSmsRequest {
    #[validate(length(min = 1, message = "phoneNumbers must not be empty"))]
    pub phone_numbers: Vec<String>,

    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsWithLinkRequest {
    #[validate(length(min = 1, message = "phoneNumber is required"))]
    pub phone_number: String,

    /// The link to include in the message
    #[validate(url(message = "url must be a valid absolute URL"))]
    pub url: String,

    /// Optional text placed before the link
    #[serde(default)]
    pub message: Option<String>,

    /// Whether to run the URL through the shortener first
    #[serde(default = "default_shorten")]
    pub shorten_url: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendWithLinkResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// The URL the caller submitted
    pub original_url: String,

    /// The URL that actually went out
    pub sent_url: String,

    /// The exact composed message text
    pub message_sent: String,
}
