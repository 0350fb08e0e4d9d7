//! Twilio SMS client
//!
//! Sends through the Twilio Messages REST API with account-SID basic auth.
//! Twilio reports delivery through the `status` field of the created
//! message resource: anything other than `failed` or `undelivered` counts
//! as accepted. On failure the vendor's numeric error code and error text
//! are concatenated into the outcome's error string.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, warn};

use sg_core::domain::value_objects::SendOutcome;
use sg_core::services::sms::SmsProvider;
use sg_shared::phone::normalize_phone_number;

use crate::InfrastructureError;

const TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Twilio SMS configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let from_number = std::env::var("TWILIO_FROM_NUMBER")
            .map_err(|_| InfrastructureError::Config("TWILIO_FROM_NUMBER not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
        })
    }
}

/// Message resource returned by the Twilio send call
#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub(crate) sid: Option<String>,
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) error_code: Option<i64>,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
}

/// Translate a Twilio message resource into a delivery outcome
pub(crate) fn outcome_from_message(message: MessageResponse) -> SendOutcome {
    if message.status != "failed" && message.status != "undelivered" {
        SendOutcome {
            success: true,
            message_id: message.sid,
            error: None,
        }
    } else {
        let code = message
            .error_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let text = message
            .error_message
            .unwrap_or_else(|| "no error message".to_string());

        SendOutcome::failed(message.sid, format!("Failed: {} - {}", code, text))
    }
}

/// Twilio SMS provider
pub struct TwilioSmsProvider {
    http: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSmsProvider {
    /// Create a new Twilio SMS provider
    pub fn new(config: TwilioConfig) -> Self {
        info!(
            "Twilio SMS provider initialized with from number: {}",
            config.from_number
        );

        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Ok(Self::new(TwilioConfig::from_env()?))
    }

    /// One send attempt against the Messages endpoint
    async fn dispatch(&self, to: &str, message: &str) -> Result<SendOutcome, InfrastructureError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        );
        let params = [
            ("To", to),
            ("From", self.config.from_number.as_str()),
            ("Body", message),
        ];

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Sms(format!(
                "Twilio API returned {}: {}",
                status, text
            )));
        }

        let message: MessageResponse = response.json().await?;
        Ok(outcome_from_message(message))
    }
}

#[async_trait]
impl SmsProvider for TwilioSmsProvider {
    async fn send(&self, to_raw: &str, message: &str, company_id: Option<&str>) -> SendOutcome {
        let to = normalize_phone_number(to_raw);

        info!(
            "Sending SMS via Twilio to {} (company: {})",
            to,
            company_id.unwrap_or("N/A")
        );

        match self.dispatch(&to, message).await {
            Ok(outcome) => {
                if outcome.success {
                    info!(
                        "SMS sent via Twilio to {}, SID: {}",
                        to,
                        outcome.message_id.as_deref().unwrap_or("-")
                    );
                } else {
                    warn!(
                        "Twilio SMS to {} failed: {}",
                        to,
                        outcome.error.as_deref().unwrap_or("unknown error")
                    );
                }
                outcome
            }
            Err(e) => {
                error!("Error sending SMS via Twilio to {}: {}", to, e);
                SendOutcome::failed(None, e.to_string())
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
