//! Shared helpers for Courier integration tests.

use async_trait::async_trait;
use courier_channels::{
    eligible_recipients, ChannelError, ChannelTransport, ContactField, Result,
};
use courier_core::types::Recipient;
use std::sync::Mutex;

/// Transport double that filters like a real channel and records the
/// recipient ids each delivery would have gone to.
#[derive(Debug)]
pub struct RecordingTransport {
    channel: &'static str,
    display: &'static str,
    field: ContactField,
    fail_with: Option<String>,
    deliveries: Mutex<Vec<Vec<String>>>,
}

impl RecordingTransport {
    /// An email-shaped transport (filters on the email field).
    pub fn email() -> Self {
        Self::new("email", "Email", ContactField::Email)
    }

    /// A WhatsApp-shaped transport (filters on the phone field).
    pub fn whatsapp() -> Self {
        Self::new("whatsapp", "WhatsApp", ContactField::Phone)
    }

    fn new(channel: &'static str, display: &'static str, field: ContactField) -> Self {
        Self {
            channel,
            display,
            field,
            fail_with: None,
            deliveries: Mutex::new(Vec::new()),
        }
    }

    /// Make every delivery fail with the given provider reason
    /// (after filtering and recording).
    pub fn failing(mut self, reason: &str) -> Self {
        self.fail_with = Some(reason.to_string());
        self
    }

    /// Recipient ids per delivery attempt, in call order.
    pub fn delivery_log(&self) -> Vec<Vec<String>> {
        self.deliveries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelTransport for RecordingTransport {
    fn channel_type(&self) -> &str {
        self.channel
    }

    fn display_name(&self) -> &str {
        self.display
    }

    async fn deliver(&self, recipients: &[Recipient], _body: &str) -> Result<()> {
        let eligible = eligible_recipients(recipients, self.field);
        if eligible.is_empty() {
            return Err(ChannelError::NoEligibleRecipients(self.field));
        }

        self.deliveries
            .lock()
            .unwrap()
            .push(eligible.iter().map(|r| r.id.clone()).collect());

        match &self.fail_with {
            Some(reason) => Err(ChannelError::provider(reason.clone())),
            None => Ok(()),
        }
    }
}
