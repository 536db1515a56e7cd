//! Message delivery channels for Courier.
//!
//! This crate provides the transport trait and per-channel implementations,
//! along with the registry and the dispatch orchestrator that fans one
//! logical message out across requested channels.

pub mod dispatch;
pub mod email;
pub mod error;
pub mod filter;
pub mod registry;
pub mod traits;
pub mod whatsapp;

pub use dispatch::Dispatcher;
pub use email::EmailTransport;
pub use error::ChannelError;
pub use filter::{eligible_recipients, ContactField};
pub use registry::TransportRegistry;
pub use traits::ChannelTransport;
pub use whatsapp::{LiveWhatsAppTransport, NoopWhatsAppTransport};

/// Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;
