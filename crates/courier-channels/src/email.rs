//! Email channel implementation.
//!
//! Sends one batched request per delivery to a Brevo-style transactional
//! email REST endpoint. The batch is atomic from the caller's point of
//! view: either the whole batch is reported sent or the channel fails.
//! Per-recipient delivery detail from the provider is not surfaced.

use crate::error::ChannelError;
use crate::filter::{eligible_recipients, ContactField};
use crate::traits::ChannelTransport;
use crate::Result;
use async_trait::async_trait;
use courier_core::config::EmailConfig;
use courier_core::secret::SecretString;
use courier_core::types::Recipient;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Email transport using a transactional-email provider's REST API.
pub struct EmailTransport {
    api_url: String,
    api_key: SecretString,
    from_name: String,
    from_address: String,
    subject: String,
    client: Client,
}

impl std::fmt::Debug for EmailTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailTransport")
            .field("api_url", &self.api_url)
            .field("from_address", &self.from_address)
            .finish()
    }
}

/// Request body for the provider's send endpoint.
#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    sender: EmailParty<'a>,
    to: Vec<EmailParty<'a>>,
    subject: &'a str,
    #[serde(rename = "htmlContent")]
    html_content: String,
}

/// An address + display-name pair.
#[derive(Debug, Serialize)]
struct EmailParty<'a> {
    email: &'a str,
    name: &'a str,
}

/// Error payload reported by the provider on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl EmailTransport {
    /// Create an email transport from configuration.
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from_name: config.from_name.clone(),
            from_address: config.from_address.clone(),
            subject: config.subject.clone(),
            client: Client::new(),
        }
    }

    fn build_payload<'a>(&'a self, recipients: &[&'a Recipient], body: &str) -> EmailPayload<'a> {
        EmailPayload {
            sender: EmailParty {
                email: &self.from_address,
                name: &self.from_name,
            },
            to: recipients
                .iter()
                .map(|r| EmailParty {
                    // Eligibility filtering guarantees the address is present.
                    email: r.email.as_deref().unwrap_or_default(),
                    name: &r.name,
                })
                .collect(),
            subject: &self.subject,
            html_content: render_html(body),
        }
    }
}

#[async_trait]
impl ChannelTransport for EmailTransport {
    fn channel_type(&self) -> &str {
        "email"
    }

    fn display_name(&self) -> &str {
        "Email"
    }

    async fn deliver(&self, recipients: &[Recipient], body: &str) -> Result<()> {
        let eligible = eligible_recipients(recipients, ContactField::Email);
        if eligible.is_empty() {
            return Err(ChannelError::NoEligibleRecipients(ContactField::Email));
        }

        debug!(recipients = eligible.len(), "sending email batch");

        let payload = self.build_payload(&eligible, body);
        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(ChannelError::provider(message));
        }

        Ok(())
    }
}

/// Render the message body into the outbound HTML envelope.
fn render_html(body: &str) -> String {
    format!(
        concat!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">"#,
            r#"<h2 style="color: #333;">New Message</h2>"#,
            r#"<div style="background-color: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">"#,
            r#"<p style="font-size: 16px; line-height: 1.6; color: #555;">{}</p>"#,
            "</div>",
            r#"<hr style="border: none; border-top: 1px solid #eee; margin: 20px 0;">"#,
            r#"<p style="font-size: 12px; color: #888;">This message was sent via Courier.</p>"#,
            "</div>",
        ),
        escape_html(body)
    )
}

/// Minimal HTML escaping for body interpolation.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
