//! Channel error types.

use crate::filter::ContactField;
use thiserror::Error;

/// Errors that can occur during channel operations.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// No recipient carries the contact field the channel requires.
    #[error("no valid {0} recipients")]
    NoEligibleRecipients(ContactField),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider-reported failure, surfaced with the provider's own message.
    #[error("{message}")]
    Provider {
        /// Failure reason reported by the provider.
        message: String,
    },

    /// Channel configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A transport for this channel type is already registered.
    #[error("Channel already registered: {0}")]
    AlreadyRegistered(String),
}

impl ChannelError {
    /// Create a provider failure, falling back to a generic reason when
    /// the provider reported nothing usable.
    pub fn provider(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Provider {
            message: if message.is_empty() {
                "unknown error".to_string()
            } else {
                message
            },
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
