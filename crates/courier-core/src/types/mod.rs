//! Common type definitions for Courier.

mod message;
mod outcome;

pub use message::{OutboundMessage, Recipient};
pub use outcome::{ChannelOutcome, DispatchResult};
