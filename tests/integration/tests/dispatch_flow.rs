//! End-to-end dispatch flow integration tests.
//!
//! These tests drive the dispatcher through the full fan-out path with
//! transport doubles that filter recipients exactly like the real
//! channels do.

use courier_channels::{Dispatcher, TransportRegistry};
use courier_core::types::{OutboundMessage, Recipient};
use courier_integration_tests::RecordingTransport;
use std::sync::Arc;

fn two_channel_dispatcher(
    email: RecordingTransport,
    whatsapp: RecordingTransport,
) -> (Dispatcher, Arc<RecordingTransport>, Arc<RecordingTransport>) {
    let email = Arc::new(email);
    let whatsapp = Arc::new(whatsapp);

    let mut registry = TransportRegistry::new();
    registry.register(email.clone()).unwrap();
    registry.register(whatsapp.clone()).unwrap();

    (Dispatcher::new(registry), email, whatsapp)
}

fn mixed_recipients_message() -> OutboundMessage {
    OutboundMessage::new("hello")
        .with_recipient(Recipient::new("1", "A").with_email("a@x.com"))
        .with_recipient(Recipient::new("2", "B").with_phone("+15551234567"))
        .with_channel("email")
        .with_channel("whatsapp")
}

#[tokio::test]
async fn test_recipients_are_partitioned_between_channels() {
    let (dispatcher, email, whatsapp) =
        two_channel_dispatcher(RecordingTransport::email(), RecordingTransport::whatsapp());

    let result = dispatcher.dispatch(&mixed_recipients_message()).await;

    assert!(result.success);
    assert!(result.outcome("email").unwrap().succeeded());
    assert!(result.outcome("whatsapp").unwrap().succeeded());

    // The email channel saw only the email-capable recipient, and the
    // WhatsApp channel only the phone-capable one.
    assert_eq!(email.delivery_log(), vec![vec!["1".to_string()]]);
    assert_eq!(whatsapp.delivery_log(), vec![vec!["2".to_string()]]);
}

#[tokio::test]
async fn test_partial_failure_is_overall_success() {
    let (dispatcher, _, _) = two_channel_dispatcher(
        RecordingTransport::email(),
        RecordingTransport::whatsapp().failing("token expired"),
    );

    let result = dispatcher.dispatch(&mixed_recipients_message()).await;

    assert!(result.success);
    assert!(result.error.is_none());
    assert!(result.outcome("email").unwrap().succeeded());
    assert_eq!(
        result.outcome("whatsapp").unwrap().reason(),
        Some("token expired")
    );
}

#[tokio::test]
async fn test_all_channels_failing_combines_reasons() {
    let (dispatcher, _, _) = two_channel_dispatcher(
        RecordingTransport::email().failing("quota exceeded"),
        RecordingTransport::whatsapp().failing("token expired"),
    );

    let result = dispatcher.dispatch(&mixed_recipients_message()).await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Email: quota exceeded, WhatsApp: token expired")
    );
}

#[tokio::test]
async fn test_channel_without_eligible_recipients_fails_alone() {
    let (dispatcher, email, whatsapp) =
        two_channel_dispatcher(RecordingTransport::email(), RecordingTransport::whatsapp());

    // Every recipient is email-only, yet both channels are requested.
    let message = OutboundMessage::new("hello")
        .with_recipient(Recipient::new("1", "A").with_email("a@x.com"))
        .with_channel("email")
        .with_channel("whatsapp");

    let result = dispatcher.dispatch(&message).await;

    assert!(result.success);
    assert!(result.outcome("email").unwrap().succeeded());
    assert_eq!(
        result.outcome("whatsapp").unwrap().reason(),
        Some("no valid phone recipients")
    );
    assert_eq!(email.delivery_log().len(), 1);
    // The precondition failed before anything was recorded.
    assert!(whatsapp.delivery_log().is_empty());
}

#[tokio::test]
async fn test_empty_channel_set_attempts_nothing() {
    let (dispatcher, email, whatsapp) =
        two_channel_dispatcher(RecordingTransport::email(), RecordingTransport::whatsapp());

    let message = OutboundMessage::new("hello")
        .with_recipient(Recipient::new("1", "A").with_email("a@x.com"));

    let result = dispatcher.dispatch(&message).await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("no channels selected"));
    assert!(result.outcomes.is_empty());
    assert!(email.delivery_log().is_empty());
    assert!(whatsapp.delivery_log().is_empty());
}

#[tokio::test]
async fn test_repeated_dispatch_is_stateless() {
    let (dispatcher, email, whatsapp) =
        two_channel_dispatcher(RecordingTransport::email(), RecordingTransport::whatsapp());
    let message = mixed_recipients_message();

    let first = dispatcher.dispatch(&message).await;
    let second = dispatcher.dispatch(&message).await;

    assert!(first.success && second.success);
    assert_eq!(first.outcomes, second.outcomes);
    // Each call delivered to the same filtered recipient sets.
    assert_eq!(email.delivery_log(), vec![vec!["1".to_string()]; 2]);
    assert_eq!(whatsapp.delivery_log(), vec![vec!["2".to_string()]; 2]);
}

#[tokio::test]
async fn test_simulated_whatsapp_from_config() {
    use courier_core::config::{ChannelsConfig, Config, WhatsAppConfig};

    let config = Config {
        channels: ChannelsConfig {
            email: None,
            whatsapp: Some(WhatsAppConfig {
                simulated_delay_ms: 0,
                ..Default::default()
            }),
        },
    };

    let registry = TransportRegistry::from_config(&config).unwrap();
    let dispatcher = Dispatcher::new(registry);

    let message = OutboundMessage::new("hello")
        .with_recipient(Recipient::new("2", "B").with_phone("+15551234567"))
        .with_channel("whatsapp");

    let result = dispatcher.dispatch(&message).await;

    assert!(result.success);
    assert!(result.outcome("whatsapp").unwrap().succeeded());
}
