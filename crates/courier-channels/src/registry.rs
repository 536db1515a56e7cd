//! Transport registry.

use crate::email::EmailTransport;
use crate::error::ChannelError;
use crate::traits::ChannelTransport;
use crate::whatsapp::{LiveWhatsAppTransport, NoopWhatsAppTransport};
use crate::Result;
use courier_core::config::{Config, WhatsAppMode};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Registry of channel transports.
///
/// Registration order is significant: it defines the channel ordering of
/// combined error strings in the aggregate dispatch result. The registry
/// is built once and never mutated during dispatch, so no locking is
/// involved.
#[derive(Debug, Default)]
pub struct TransportRegistry {
    transports: Vec<Arc<dyn ChannelTransport>>,
}

impl TransportRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            transports: Vec::new(),
        }
    }

    /// Build a registry from configuration.
    ///
    /// Only enabled channel sections produce a transport. The WhatsApp
    /// section selects between the live and the simulated transport by
    /// its configured mode.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new();

        if let Some(email) = &config.channels.email {
            if email.enabled {
                registry.register(Arc::new(EmailTransport::new(email)))?;
            }
        }

        if let Some(whatsapp) = &config.channels.whatsapp {
            if whatsapp.enabled {
                let transport: Arc<dyn ChannelTransport> = match whatsapp.mode {
                    WhatsAppMode::Live => Arc::new(LiveWhatsAppTransport::from_config(whatsapp)?),
                    WhatsAppMode::Simulated => Arc::new(NoopWhatsAppTransport::new(
                        Duration::from_millis(whatsapp.simulated_delay_ms),
                    )),
                };
                registry.register(transport)?;
            }
        }

        info!(channels = ?registry.channel_types(), "transport registry built");
        Ok(registry)
    }

    /// Register a transport. Fails if one is already registered for the
    /// same channel type.
    pub fn register(&mut self, transport: Arc<dyn ChannelTransport>) -> Result<()> {
        let channel_type = transport.channel_type();
        if self.get(channel_type).is_some() {
            return Err(ChannelError::AlreadyRegistered(channel_type.to_string()));
        }
        self.transports.push(transport);
        Ok(())
    }

    /// Get a transport by channel type.
    pub fn get(&self, channel_type: &str) -> Option<&Arc<dyn ChannelTransport>> {
        self.transports
            .iter()
            .find(|t| t.channel_type() == channel_type)
    }

    /// Iterate transports in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ChannelTransport>> {
        self.transports.iter()
    }

    /// Registered channel types, in registration order.
    pub fn channel_types(&self) -> Vec<&str> {
        self.transports.iter().map(|t| t.channel_type()).collect()
    }

    /// Number of registered transports.
    pub fn len(&self) -> usize {
        self.transports.len()
    }

    /// Whether no transport is registered.
    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }
}
