//! Delivery outcome value objects
//!
//! Every provider and shortener call produces one of these values. They are
//! created at call entry, consumed by the next stage, and discarded once the
//! response is written.

use serde::{Deserialize, Serialize};

/// Outcome of a single SMS send attempt.
///
/// Invariant: `success == true` implies `error` is `None`; `success ==
/// false` implies `error` is `Some`. A failed send may still carry a
/// `message_id` when the provider issued one before reporting failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOutcome {
    /// Whether the provider accepted the message
    pub success: bool,

    /// Provider-issued message identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Provider or transport error text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendOutcome {
    /// A message the provider accepted for delivery
    pub fn delivered(message_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    /// A failed send; the provider may still have issued an identifier
    pub fn failed(message_id: Option<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id,
            error: Some(error.into()),
        }
    }
}

/// Outcome of a URL shortening attempt.
///
/// Same invariant shape as [`SendOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenOutcome {
    /// Whether any shortening endpoint produced a usable URL
    pub success: bool,

    /// The shortened URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,

    /// Why shortening failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShortenOutcome {
    /// A successfully shortened URL
    pub fn shortened(short_url: impl Into<String>) -> Self {
        Self {
            success: true,
            short_url: Some(short_url.into()),
            error: None,
        }
    }

    /// A failed shortening attempt
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            short_url: None,
            error: Some(error.into()),
        }
    }
}

/// Outcome of a link-carrying send, with the URLs and exact text for caller
/// auditability
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSendOutcome {
    #[serde(flatten)]
    pub outcome: SendOutcome,

    /// The URL the caller submitted
    pub original_url: String,

    /// The URL that went out (shortened when shortening succeeded)
    pub sent_url: String,

    /// The exact composed message text
    pub message_sent: String,
}

/// Per-recipient entry in a bulk send report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItemOutcome {
    /// The recipient as the caller supplied it
    pub phone_number: String,

    #[serde(flatten)]
    pub outcome: SendOutcome,
}

/// Aggregate result of a bulk send.
///
/// `results` preserves the caller's input order; `total == sent + failed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSendReport {
    pub total: usize,
    pub sent: usize,
    pub failed: usize,
    pub results: Vec<BulkItemOutcome>,
}

impl BulkSendReport {
    /// Tally a report from an ordered list of per-recipient outcomes
    pub fn from_results(results: Vec<BulkItemOutcome>) -> Self {
        let total = results.len();
        let sent = results.iter().filter(|item| item.outcome.success).count();

        Self {
            total,
            sent,
            failed: total - sent,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_outcome_invariant() {
        let delivered = SendOutcome::delivered("SM123");
        assert!(delivered.success);
        assert!(delivered.error.is_none());

        let failed = SendOutcome::failed(Some("SM124".to_string()), "undeliverable");
        assert!(!failed.success);
        assert_eq!(failed.message_id.as_deref(), Some("SM124"));
        assert!(failed.error.is_some());
    }

    #[test]
    fn test_bulk_report_tally() {
        let report = BulkSendReport::from_results(vec![
            BulkItemOutcome {
                phone_number: "+15551230001".to_string(),
                outcome: SendOutcome::delivered("a"),
            },
            BulkItemOutcome {
                phone_number: "+15551230002".to_string(),
                outcome: SendOutcome::failed(None, "rejected"),
            },
        ]);

        assert_eq!(report.total, 2);
        assert_eq!(report.sent, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.results[0].phone_number, "+15551230001");
        assert_eq!(report.results[1].phone_number, "+15551230002");
    }

    #[test]
    fn test_bulk_item_serializes_flat() {
        let item = BulkItemOutcome {
            phone_number: "+15551230001".to_string(),
            outcome: SendOutcome::delivered("SM1"),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["phoneNumber"], "+15551230001");
        assert_eq!(json["messageId"], "SM1");
        assert_eq!(json["success"], true);
    }
}
