//! Unit tests for the dispatch facade

use std::sync::Arc;

use super::mocks::{FixedShortener, RecordingProvider};
use crate::services::dispatch::SmsDispatcher;

fn dispatcher(
    provider: Arc<RecordingProvider>,
    shortener: Arc<FixedShortener>,
) -> SmsDispatcher {
    SmsDispatcher::new(provider, shortener)
}

#[tokio::test]
async fn test_send_simple_delegates_to_provider() {
    let provider = Arc::new(RecordingProvider::new());
    let shortener = Arc::new(FixedShortener::succeeding("https://tiny.one/x"));
    let dispatch = dispatcher(provider.clone(), shortener);

    let outcome = dispatch
        .send_simple("+15551234567", "hello", Some("acme"))
        .await;

    assert!(outcome.success);
    assert_eq!(provider.messages(), vec![(
        "+15551234567".to_string(),
        "hello".to_string()
    )]);
}

#[tokio::test]
async fn test_bulk_preserves_order_and_tallies_failures() {
    let provider = Arc::new(RecordingProvider::failing_for(&["+15551230002"]));
    let shortener = Arc::new(FixedShortener::failing());
    let dispatch = dispatcher(provider.clone(), shortener);

    let phones = vec!["+15551230001".to_string(), "+15551230002".to_string()];
    let report = dispatch.send_bulk(&phones, "bulk hello", None).await;

    assert_eq!(report.total, 2);
    assert_eq!(report.sent, 1);
    assert_eq!(report.failed, 1);

    // Per-number results keep input order
    assert_eq!(report.results[0].phone_number, "+15551230001");
    assert!(report.results[0].outcome.success);
    assert_eq!(report.results[1].phone_number, "+15551230002");
    assert!(!report.results[1].outcome.success);

    // The batch was not short-circuited by the failure
    assert_eq!(provider.messages().len(), 2);
}

#[tokio::test]
async fn test_send_with_link_shortening_disabled_skips_shortener() {
    let provider = Arc::new(RecordingProvider::new());
    let shortener = Arc::new(FixedShortener::succeeding("https://tiny.one/x"));
    let dispatch = dispatcher(provider.clone(), shortener.clone());

    let result = dispatch
        .send_with_link(
            "+15551234567",
            "https://example.com/very/long/path",
            Some("Check this out:"),
            false,
            None,
        )
        .await;

    assert_eq!(shortener.call_count(), 0);
    assert_eq!(result.sent_url, "https://example.com/very/long/path");
    assert_eq!(
        result.message_sent,
        "Check this out: https://example.com/very/long/path"
    );
    assert_eq!(
        provider.messages()[0].1,
        "Check this out: https://example.com/very/long/path"
    );
}

#[tokio::test]
async fn test_send_with_link_substitutes_short_url() {
    let provider = Arc::new(RecordingProvider::new());
    let shortener = Arc::new(FixedShortener::succeeding("https://tiny.one/abc"));
    let dispatch = dispatcher(provider.clone(), shortener.clone());

    let result = dispatch
        .send_with_link(
            "+15551234567",
            "https://example.com/very/long/path",
            Some("Link:"),
            true,
            None,
        )
        .await;

    assert_eq!(shortener.call_count(), 1);
    assert!(result.outcome.success);
    assert_eq!(result.original_url, "https://example.com/very/long/path");
    assert_eq!(result.sent_url, "https://tiny.one/abc");
    assert_eq!(result.message_sent, "Link: https://tiny.one/abc");
}

#[tokio::test]
async fn test_send_with_link_falls_back_to_original_on_shortener_failure() {
    let provider = Arc::new(RecordingProvider::new());
    let shortener = Arc::new(FixedShortener::failing());
    let dispatch = dispatcher(provider.clone(), shortener.clone());

    let result = dispatch
        .send_with_link("+15551234567", "https://example.com/page", None, true, None)
        .await;

    // The send is still attempted with the original URL
    assert_eq!(shortener.call_count(), 1);
    assert!(result.outcome.success);
    assert_eq!(result.sent_url, "https://example.com/page");
    assert_eq!(result.message_sent, "https://example.com/page");
    assert_eq!(provider.messages().len(), 1);
}

#[tokio::test]
async fn test_send_with_link_empty_message_sends_url_alone() {
    let provider = Arc::new(RecordingProvider::new());
    let shortener = Arc::new(FixedShortener::succeeding("https://tiny.one/abc"));
    let dispatch = dispatcher(provider.clone(), shortener);

    let result = dispatch
        .send_with_link("+15551234567", "https://example.com", Some(""), true, None)
        .await;

    assert_eq!(result.message_sent, "https://tiny.one/abc");
}
