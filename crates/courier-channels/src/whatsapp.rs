//! WhatsApp channel implementations.
//!
//! Two explicit transports share the channel contract:
//!
//! - [`LiveWhatsAppTransport`] talks to the WhatsApp Cloud API (Meta),
//!   dispatching one message per qualifying recipient. Distinct messages
//!   with distinct destination numbers cannot be combined in one call.
//! - [`NoopWhatsAppTransport`] is the documented simulated mode for
//!   deployments without a live Cloud API account: it applies an
//!   artificial delay, logs what would be sent, and always succeeds.
//!
//! Selection between the two happens in the registry, by configuration;
//! the implementations are never mixed in one code path.

use crate::error::ChannelError;
use crate::filter::{eligible_recipients, ContactField};
use crate::traits::ChannelTransport;
use crate::Result;
use async_trait::async_trait;
use courier_core::config::WhatsAppConfig;
use courier_core::secret::SecretString;
use courier_core::types::Recipient;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// WhatsApp message payload for sending.
#[derive(Debug, Serialize)]
struct WhatsAppMessagePayload<'a> {
    messaging_product: &'static str,
    recipient_type: &'static str,
    to: String,
    #[serde(rename = "type")]
    message_type: &'static str,
    text: WhatsAppText<'a>,
}

#[derive(Debug, Serialize)]
struct WhatsAppText<'a> {
    body: &'a str,
}

/// WhatsApp transport using the Cloud API.
pub struct LiveWhatsAppTransport {
    api_base: String,
    phone_number_id: String,
    access_token: SecretString,
    client: Client,
}

impl std::fmt::Debug for LiveWhatsAppTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveWhatsAppTransport")
            .field("api_base", &self.api_base)
            .field("phone_number_id", &self.phone_number_id)
            .finish()
    }
}

impl LiveWhatsAppTransport {
    /// Create a live transport from configuration.
    ///
    /// Fails when the Cloud API credentials required for live sending
    /// are not configured.
    pub fn from_config(config: &WhatsAppConfig) -> Result<Self> {
        let phone_number_id = config
            .phone_number_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ChannelError::config("Missing phone_number_id"))?
            .to_string();

        if config.access_token.is_empty() {
            return Err(ChannelError::config("Missing access_token"));
        }

        Ok(Self {
            api_base: config.api_base.clone(),
            phone_number_id,
            access_token: config.access_token.clone(),
            client: Client::new(),
        })
    }

    /// Get the API URL for messages.
    fn messages_url(&self) -> String {
        format!("{}/{}/messages", self.api_base, self.phone_number_id)
    }

    async fn send_to(&self, phone: &str, body: &str) -> Result<()> {
        let recipient = normalize_phone(phone);
        debug!(to = %recipient, "sending WhatsApp message");

        let payload = WhatsAppMessagePayload {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: recipient,
            message_type: "text",
            text: WhatsAppText { body },
        };

        let response = self
            .client
            .post(self.messages_url())
            .bearer_auth(self.access_token.expose_secret())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChannelError::provider(format!(
                "send failed ({status}): {body}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl ChannelTransport for LiveWhatsAppTransport {
    fn channel_type(&self) -> &str {
        "whatsapp"
    }

    fn display_name(&self) -> &str {
        "WhatsApp"
    }

    async fn deliver(&self, recipients: &[Recipient], body: &str) -> Result<()> {
        let eligible = eligible_recipients(recipients, ContactField::Phone);
        if eligible.is_empty() {
            return Err(ChannelError::NoEligibleRecipients(ContactField::Phone));
        }

        // One call per recipient; the first failure fails the channel.
        for recipient in eligible {
            let phone = recipient.phone.as_deref().unwrap_or_default();
            self.send_to(phone, body).await?;
        }

        Ok(())
    }
}

/// Simulated WhatsApp transport.
///
/// Performs no network calls: each delivery waits out the configured
/// artificial delay, logs the would-be sends, and reports success. The
/// recipient-eligibility precondition still applies, so reporting stays
/// accurate even in simulated deployments.
#[derive(Debug)]
pub struct NoopWhatsAppTransport {
    delay: Duration,
}

impl NoopWhatsAppTransport {
    /// Create a simulated transport with the given artificial delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ChannelTransport for NoopWhatsAppTransport {
    fn channel_type(&self) -> &str {
        "whatsapp"
    }

    fn display_name(&self) -> &str {
        "WhatsApp"
    }

    async fn deliver(&self, recipients: &[Recipient], body: &str) -> Result<()> {
        let eligible = eligible_recipients(recipients, ContactField::Phone);
        if eligible.is_empty() {
            return Err(ChannelError::NoEligibleRecipients(ContactField::Phone));
        }

        tokio::time::sleep(self.delay).await;

        for recipient in eligible {
            debug!(
                to = recipient.phone.as_deref().unwrap_or_default(),
                body_len = body.len(),
                "WhatsApp message would be sent"
            );
        }

        Ok(())
    }
}

/// Normalize phone number to WhatsApp format (digits only, no +).
fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
