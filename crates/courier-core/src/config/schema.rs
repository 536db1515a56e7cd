//! Configuration schema definitions.

use crate::secret::SecretString;
use serde::{Deserialize, Serialize};

/// Default send endpoint for the transactional-email provider (Brevo).
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Default WhatsApp Cloud API base URL.
pub const DEFAULT_WHATSAPP_API_BASE: &str = "https://graph.facebook.com/v18.0";

/// Main Courier configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Channel configurations.
    #[serde(default)]
    pub channels: ChannelsConfig,
}

/// Channels configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelsConfig {
    /// Email configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailConfig>,

    /// WhatsApp configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<WhatsAppConfig>,
}

/// Email channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Enable/disable.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Provider send endpoint.
    #[serde(default = "default_email_api_url")]
    pub api_url: String,

    /// Provider API key.
    #[serde(default)]
    pub api_key: SecretString,

    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Sender address.
    #[serde(default)]
    pub from_address: String,

    /// Subject line applied to every outbound message.
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: default_email_api_url(),
            api_key: SecretString::default(),
            from_name: default_from_name(),
            from_address: String::new(),
            subject: default_subject(),
        }
    }
}

/// WhatsApp channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Enable/disable.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Transport mode. The simulated transport performs no network calls.
    #[serde(default)]
    pub mode: WhatsAppMode,

    /// Cloud API base URL.
    #[serde(default = "default_whatsapp_api_base")]
    pub api_base: String,

    /// Business phone number ID (required in live mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,

    /// Bearer access token (required in live mode).
    #[serde(default)]
    pub access_token: SecretString,

    /// Artificial delay applied by the simulated transport per delivery.
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: WhatsAppMode::default(),
            api_base: default_whatsapp_api_base(),
            phone_number_id: None,
            access_token: SecretString::default(),
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

/// WhatsApp transport mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhatsAppMode {
    /// Real Cloud API calls.
    Live,

    /// No-op transport that logs would-be sends and always succeeds.
    #[default]
    Simulated,
}

fn default_true() -> bool {
    true
}

fn default_email_api_url() -> String {
    DEFAULT_EMAIL_API_URL.to_string()
}

fn default_from_name() -> String {
    "Courier".to_string()
}

fn default_subject() -> String {
    "New Message from Courier".to_string()
}

fn default_whatsapp_api_base() -> String {
    DEFAULT_WHATSAPP_API_BASE.to_string()
}

fn default_simulated_delay_ms() -> u64 {
    1000
}
