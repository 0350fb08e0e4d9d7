//! Azure Communication Services SMS client
//!
//! Sends through the ACS SMS REST API. Every request is signed with the
//! resource access key (HMAC-SHA256 over method, path and content hash, as
//! the service requires). The per-recipient `successful` flag in the
//! response is the delivery signal; the ACS message id is surfaced whether
//! or not the send succeeded.

use async_trait::async_trait;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::header;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{error, info, warn};
use url::Url;

use sg_core::domain::value_objects::SendOutcome;
use sg_core::services::sms::SmsProvider;
use sg_shared::phone::normalize_phone_number;

use crate::InfrastructureError;

const ACS_API_VERSION: &str = "2021-03-07";

/// Azure Communication Services configuration
#[derive(Debug, Clone)]
pub struct AzureSmsConfig {
    /// Resource endpoint, e.g. `https://my-resource.communication.azure.com`
    pub endpoint: String,
    /// Base64 access key from the resource connection string
    pub access_key: String,
    /// From phone number (must be provisioned on the resource)
    pub from_number: String,
}

impl AzureSmsConfig {
    /// Create configuration from environment variables.
    ///
    /// `ACS_CONNECTION_STRING` carries the endpoint and access key in the
    /// `endpoint=...;accesskey=...` form the Azure portal hands out;
    /// `ACS_FROM_NUMBER` is the provisioned sender. Both are required.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let connection_string = std::env::var("ACS_CONNECTION_STRING")
            .map_err(|_| InfrastructureError::Config("ACS_CONNECTION_STRING not set".to_string()))?;
        let from_number = std::env::var("ACS_FROM_NUMBER")
            .map_err(|_| InfrastructureError::Config("ACS_FROM_NUMBER not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "ACS_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Self::from_connection_string(&connection_string, from_number)
    }

    /// Parse an ACS connection string into a configuration
    pub fn from_connection_string(
        connection_string: &str,
        from_number: String,
    ) -> Result<Self, InfrastructureError> {
        let mut endpoint = None;
        let mut access_key = None;

        for part in connection_string.split(';') {
            if let Some((key, value)) = part.split_once('=') {
                match key.trim().to_ascii_lowercase().as_str() {
                    "endpoint" => endpoint = Some(value.trim().trim_end_matches('/').to_string()),
                    "accesskey" => access_key = Some(value.trim().to_string()),
                    _ => {}
                }
            }
        }

        let endpoint = endpoint.ok_or_else(|| {
            InfrastructureError::Config("connection string is missing 'endpoint'".to_string())
        })?;
        let access_key = access_key.ok_or_else(|| {
            InfrastructureError::Config("connection string is missing 'accesskey'".to_string())
        })?;

        Ok(Self {
            endpoint,
            access_key,
            from_number,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SmsSendRequest<'a> {
    from: &'a str,
    sms_recipients: Vec<SmsRecipient<'a>>,
    message: &'a str,
    sms_send_options: SmsSendOptions,
}

#[derive(Serialize)]
struct SmsRecipient<'a> {
    to: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SmsSendOptions {
    enable_delivery_report: bool,
}

#[derive(Debug, Deserialize)]
struct SmsSendResponse {
    value: Vec<SmsSendReceipt>,
}

/// Per-recipient receipt in the ACS send response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SmsSendReceipt {
    #[serde(default)]
    pub(crate) message_id: Option<String>,
    pub(crate) successful: bool,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
}

/// Translate an ACS receipt into a delivery outcome
pub(crate) fn outcome_from_receipt(receipt: SmsSendReceipt) -> SendOutcome {
    if receipt.successful {
        SendOutcome {
            success: true,
            message_id: receipt.message_id,
            error: None,
        }
    } else {
        SendOutcome::failed(
            receipt.message_id,
            receipt
                .error_message
                .unwrap_or_else(|| "Failed to send SMS".to_string()),
        )
    }
}

/// Azure Communication Services SMS provider
pub struct AzureSmsProvider {
    http: reqwest::Client,
    config: AzureSmsConfig,
}

impl AzureSmsProvider {
    /// Create a new ACS SMS provider
    pub fn new(config: AzureSmsConfig) -> Self {
        info!(
            "Azure SMS provider initialized with from number: {}",
            config.from_number
        );

        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Ok(Self::new(AzureSmsConfig::from_env()?))
    }

    /// Build the `x-ms-content-sha256` and `Authorization` header values for
    /// a request
    fn sign_request(
        &self,
        method: &str,
        url: &Url,
        body: &[u8],
        date: &str,
    ) -> Result<(String, String), InfrastructureError> {
        let engine = base64::engine::general_purpose::STANDARD;

        let content_hash = engine.encode(Sha256::digest(body));
        let host = url.host_str().ok_or_else(|| {
            InfrastructureError::Config("ACS endpoint has no host".to_string())
        })?;
        let path_and_query = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        let string_to_sign = format!(
            "{}\n{}\n{};{};{}",
            method, path_and_query, date, host, content_hash
        );

        let key = engine.decode(&self.config.access_key).map_err(|_| {
            InfrastructureError::Config("ACS access key is not valid base64".to_string())
        })?;
        let mut mac = Hmac::<Sha256>::new_from_slice(&key).map_err(|_| {
            InfrastructureError::Config("ACS access key is unusable as an HMAC key".to_string())
        })?;
        mac.update(string_to_sign.as_bytes());
        let signature = engine.encode(mac.finalize().into_bytes());

        let authorization = format!(
            "HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature={}",
            signature
        );

        Ok((content_hash, authorization))
    }

    /// One signed send attempt; transport and decode problems surface as
    /// errors for the caller to convert
    async fn dispatch(&self, to: &str, message: &str) -> Result<SendOutcome, InfrastructureError> {
        let request = SmsSendRequest {
            from: &self.config.from_number,
            sms_recipients: vec![SmsRecipient { to }],
            message,
            sms_send_options: SmsSendOptions {
                enable_delivery_report: false,
            },
        };
        let body = serde_json::to_vec(&request)?;

        let url = Url::parse(&format!(
            "{}/sms?api-version={}",
            self.config.endpoint, ACS_API_VERSION
        ))
        .map_err(|e| InfrastructureError::Config(format!("invalid ACS endpoint: {}", e)))?;

        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let (content_hash, authorization) = self.sign_request("POST", &url, &body, &date)?;

        let response = self
            .http
            .post(url)
            .header("x-ms-date", &date)
            .header("x-ms-content-sha256", &content_hash)
            .header(header::AUTHORIZATION, &authorization)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Sms(format!(
                "ACS API returned {}: {}",
                status, text
            )));
        }

        let payload: SmsSendResponse = response.json().await?;
        let receipt = payload.value.into_iter().next().ok_or_else(|| {
            InfrastructureError::Sms("ACS API returned an empty receipt list".to_string())
        })?;

        Ok(outcome_from_receipt(receipt))
    }
}

#[async_trait]
impl SmsProvider for AzureSmsProvider {
    async fn send(&self, to_raw: &str, message: &str, company_id: Option<&str>) -> SendOutcome {
        let to = normalize_phone_number(to_raw);

        info!(
            "Sending SMS to {} (company: {})",
            to,
            company_id.unwrap_or("N/A")
        );

        match self.dispatch(&to, message).await {
            Ok(outcome) => {
                if outcome.success {
                    info!(
                        "SMS sent to {}, message id: {}",
                        to,
                        outcome.message_id.as_deref().unwrap_or("-")
                    );
                } else {
                    warn!(
                        "SMS to {} failed: {}",
                        to,
                        outcome.error.as_deref().unwrap_or("unknown error")
                    );
                }
                outcome
            }
            Err(e) => {
                error!("Error sending SMS to {}: {}", to, e);
                SendOutcome::failed(None, e.to_string())
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Azure"
    }
}
