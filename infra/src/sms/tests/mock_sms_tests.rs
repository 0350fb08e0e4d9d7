//! Unit tests for the mock SMS provider

use sg_core::services::sms::SmsProvider;

use crate::sms::MockSmsProvider;

#[tokio::test]
async fn test_mock_send_success() {
    let provider = MockSmsProvider::new();
    let outcome = provider.send("+15551234567", "Test message", None).await;

    assert!(outcome.success);
    assert!(outcome.message_id.unwrap().starts_with("mock_"));
    assert_eq!(provider.message_count(), 1);
}

#[tokio::test]
async fn test_mock_normalizes_before_validating() {
    let provider = MockSmsProvider::new();
    let outcome = provider.send("(555) 123-4567", "Test message", Some("acme")).await;

    assert!(outcome.success);
}

#[tokio::test]
async fn test_mock_rejects_unusable_number() {
    let provider = MockSmsProvider::new();
    let outcome = provider.send("12", "Test message", None).await;

    assert!(!outcome.success);
    assert!(outcome.error.unwrap().contains("Invalid phone number"));
}

#[tokio::test]
async fn test_mock_engineered_failure() {
    let provider = MockSmsProvider::failing_for(&["+15551230002"]);

    let ok = provider.send("+15551230001", "hello", None).await;
    let failed = provider.send("+15551230002", "hello", None).await;

    assert!(ok.success);
    assert!(!failed.success);
    assert_eq!(failed.error.as_deref(), Some("Simulated SMS sending failure"));
    assert_eq!(provider.message_count(), 2);
}

#[test]
fn test_provider_name() {
    let provider = MockSmsProvider::new();
    assert_eq!(provider.provider_name(), "Mock");
}
