//! Config save/load roundtrip integration tests.
//!
//! These tests verify that configuration can be serialized, written to disk,
//! and loaded back with identical field values.

use courier_core::config::{ChannelsConfig, Config, EmailConfig, WhatsAppConfig, WhatsAppMode};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courier.json5");

    let config = Config {
        channels: ChannelsConfig {
            email: Some(EmailConfig {
                api_key: "k".into(),
                from_address: "noreply@example.com".to_string(),
                ..Default::default()
            }),
            whatsapp: Some(WhatsAppConfig::default()),
        },
    };
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    let email = loaded.channels.email.unwrap();
    // Sender identity and endpoint defaults should survive the roundtrip
    assert_eq!(email.from_address, "noreply@example.com");
    assert_eq!(email.api_url, courier_core::config::DEFAULT_EMAIL_API_URL);
    // WhatsApp defaults to the simulated transport
    let whatsapp = loaded.channels.whatsapp.unwrap();
    assert_eq!(whatsapp.mode, WhatsAppMode::Simulated);
    assert_eq!(whatsapp.simulated_delay_ms, 1000);
}

#[test]
fn test_config_modify_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courier.json5");

    let mut config = Config::default();
    config.channels.whatsapp = Some(WhatsAppConfig {
        mode: WhatsAppMode::Live,
        phone_number_id: Some("123456789".to_string()),
        access_token: "token".into(),
        ..Default::default()
    });
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    let whatsapp = loaded.channels.whatsapp.unwrap();
    assert_eq!(whatsapp.mode, WhatsAppMode::Live);
    assert_eq!(whatsapp.phone_number_id.as_deref(), Some("123456789"));
    // The token value itself survives even though Debug output redacts it
    assert_eq!(whatsapp.access_token.expose_secret(), "token");
}

#[test]
fn test_config_accepts_json5_syntax() {
    let config = Config::parse(
        r#"{
            // trailing commas and comments are fine
            channels: {
                whatsapp: { mode: "simulated", simulated_delay_ms: 50, },
            },
        }"#,
    )
    .unwrap();

    assert_eq!(
        config.channels.whatsapp.unwrap().simulated_delay_ms,
        50
    );
}

#[test]
fn test_config_load_nonexistent() {
    let result = Config::load(Path::new("/nonexistent/courier.json5"));
    assert!(result.is_err());
}

#[test]
fn test_config_parse_invalid() {
    let result = Config::parse("not valid json");
    assert!(result.is_err());
}

#[test]
fn test_loaded_config_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courier.json5");

    // Live mode without credentials should be caught by validation,
    // not by a later transport failure.
    let mut config = Config::default();
    config.channels.whatsapp = Some(WhatsAppConfig {
        mode: WhatsAppMode::Live,
        ..Default::default()
    });
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    let err = loaded.validate().unwrap_err();
    assert!(err.to_string().contains("live mode"));
}
