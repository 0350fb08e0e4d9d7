//! Mock SMS provider
//!
//! Logs messages instead of sending them. Used for local development and by
//! the handler tests, which rely on the engineered per-number failures to
//! exercise error paths.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use sg_core::domain::value_objects::SendOutcome;
use sg_core::services::sms::SmsProvider;
use sg_shared::phone::{is_valid_phone_number, normalize_phone_number};

/// Mock SMS provider for development and testing
#[derive(Clone, Default)]
pub struct MockSmsProvider {
    /// Counter for tracking number of send attempts
    message_count: Arc<AtomicU64>,
    /// Canonical numbers for which sends are made to fail
    fail_numbers: HashSet<String>,
    /// Whether every send should fail
    fail_all: bool,
}

impl MockSmsProvider {
    /// Create a mock provider where every send succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider where every send fails
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Create a mock provider that fails only for the given numbers
    /// (compared after normalization)
    pub fn failing_for(numbers: &[&str]) -> Self {
        Self {
            fail_numbers: numbers
                .iter()
                .map(|n| normalize_phone_number(n))
                .collect(),
            ..Self::default()
        }
    }

    /// Get the total number of send attempts
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send(&self, to_raw: &str, message: &str, company_id: Option<&str>) -> SendOutcome {
        self.message_count.fetch_add(1, Ordering::SeqCst);

        let to = normalize_phone_number(to_raw);

        if !is_valid_phone_number(&to) {
            warn!("Mock SMS rejected invalid phone number: {}", to);
            return SendOutcome::failed(None, format!("Invalid phone number format: {}", to));
        }

        if self.fail_all || self.fail_numbers.contains(&to) {
            warn!("Mock SMS simulating failure for {}", to);
            return SendOutcome::failed(None, "Simulated SMS sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());

        info!(
            "Mock SMS to {} (company: {}): {} [{} chars]",
            to,
            company_id.unwrap_or("N/A"),
            message_id,
            message.len()
        );

        SendOutcome::delivered(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
