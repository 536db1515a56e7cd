//! Core channel transport trait.

use crate::Result;
use async_trait::async_trait;
use courier_core::types::Recipient;
use std::fmt::Debug;

/// A delivery transport for one channel.
///
/// Transports receive the full recipient list and filter it themselves for
/// the contact field they require. Every failure mode is returned as a
/// [`ChannelError`](crate::ChannelError); a transport never panics on
/// delivery problems.
#[async_trait]
pub trait ChannelTransport: Send + Sync + Debug {
    /// Stable channel identifier ("email", "whatsapp") matched against
    /// a message's requested channels.
    fn channel_type(&self) -> &str;

    /// Human-readable channel name, used in aggregate error strings.
    fn display_name(&self) -> &str;

    /// Attempt delivery of `body` to every eligible recipient.
    ///
    /// The channel-level contract is all-or-nothing: either the whole
    /// send is reported delivered, or the channel fails with one reason.
    async fn deliver(&self, recipients: &[Recipient], body: &str) -> Result<()>;
}
