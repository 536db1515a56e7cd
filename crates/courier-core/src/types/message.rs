//! Recipient and outbound message types.

use serde::{Deserialize, Serialize};

/// A message recipient.
///
/// A recipient is usable by a channel only if the contact field that
/// channel requires is populated. Neither field is mandatory at
/// construction; per-channel eligibility is decided at dispatch time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Opaque recipient identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address (required for the email channel).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number (required for the WhatsApp channel).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Recipient {
    /// Create a recipient with no contact fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            phone: None,
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Whether this recipient has a non-empty email address.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Whether this recipient has a non-empty phone number.
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// A logical message to be fanned out across delivery channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Channel-agnostic body text.
    pub body: String,

    /// Ordered recipient list. Duplicates by id are not deduplicated;
    /// that is the caller's responsibility.
    #[serde(default)]
    pub recipients: Vec<Recipient>,

    /// Requested channel identifiers (e.g. "email", "whatsapp").
    /// Unknown identifiers are ignored at dispatch, not rejected.
    #[serde(default)]
    pub channels: Vec<String>,
}

impl OutboundMessage {
    /// Create a message with the given body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            recipients: Vec::new(),
            channels: Vec::new(),
        }
    }

    /// Add a recipient.
    pub fn with_recipient(mut self, recipient: Recipient) -> Self {
        self.recipients.push(recipient);
        self
    }

    /// Request a delivery channel.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channels.push(channel.into());
        self
    }

    /// Whether the given channel identifier was requested.
    pub fn requests_channel(&self, channel: &str) -> bool {
        self.channels.iter().any(|c| c == channel)
    }
}
