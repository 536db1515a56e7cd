//! Dispatch orchestration.
//!
//! One dispatch call fans a logical message out to every requested channel
//! that has a registered transport, runs the transports concurrently, and
//! reduces their independent outcomes into a single aggregate result.

use crate::registry::TransportRegistry;
use courier_core::types::{ChannelOutcome, DispatchResult, OutboundMessage};
use futures::future::join_all;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Orchestrates message delivery across channels.
///
/// A dispatcher holds only the immutable transport registry; repeated
/// dispatch calls are fully independent and share no state.
#[derive(Debug)]
pub struct Dispatcher {
    registry: TransportRegistry,
}

impl Dispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: TransportRegistry) -> Self {
        Self { registry }
    }

    /// The transport registry backing this dispatcher.
    pub fn registry(&self) -> &TransportRegistry {
        &self.registry
    }

    /// Deliver `message` across its requested channels.
    ///
    /// Each requested channel with a registered transport is invoked with
    /// the full recipient list (transports filter for themselves);
    /// requested identifiers without a transport are skipped and produce
    /// no outcome entry. Invocations run concurrently and are all awaited
    /// before the aggregate is computed; one channel's failure never
    /// prevents or alters another's.
    ///
    /// The aggregate succeeds unless every invoked channel failed.
    /// Channel-level problems never surface as errors from this method;
    /// they are data in the returned result.
    pub async fn dispatch(&self, message: &OutboundMessage) -> DispatchResult {
        if message.channels.is_empty() {
            warn!("dispatch requested with no channels selected");
            return DispatchResult::failure("no channels selected");
        }

        let sends: Vec<_> = self
            .registry
            .iter()
            .filter(|t| message.requests_channel(t.channel_type()))
            .map(|transport| async move {
                let outcome = match transport.deliver(&message.recipients, &message.body).await {
                    Ok(()) => ChannelOutcome::Succeeded,
                    Err(e) => ChannelOutcome::failed(e.to_string()),
                };
                (transport.channel_type().to_string(), outcome)
            })
            .collect();

        // Join, not race: every invoked transport settles before reduction.
        let settled = join_all(sends).await;

        let mut outcomes = BTreeMap::new();
        for (channel, outcome) in settled {
            match &outcome {
                ChannelOutcome::Succeeded => {
                    info!(channel = %channel, "channel delivery succeeded");
                }
                ChannelOutcome::Failed { reason } => {
                    warn!(channel = %channel, %reason, "channel delivery failed");
                }
            }
            outcomes.insert(channel, outcome);
        }

        // Partial success counts as overall success; callers inspect the
        // outcome map for per-channel detail.
        if outcomes.values().any(ChannelOutcome::succeeded) {
            return DispatchResult {
                success: true,
                error: None,
                outcomes,
            };
        }

        let error = self.combined_error(&outcomes);
        DispatchResult {
            success: false,
            error: Some(error),
            outcomes,
        }
    }

    /// Concatenate per-channel failure reasons in registry order, with
    /// "N/A" for registered channels that were not invoked.
    fn combined_error(&self, outcomes: &BTreeMap<String, ChannelOutcome>) -> String {
        if self.registry.is_empty() {
            return "no channels attempted".to_string();
        }

        self.registry
            .iter()
            .map(|t| {
                let reason = outcomes
                    .get(t.channel_type())
                    .and_then(ChannelOutcome::reason)
                    .unwrap_or("N/A");
                format!("{}: {}", t.display_name(), reason)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
