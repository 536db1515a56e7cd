//! # courier-core
//!
//! Core types, configuration, and utilities for Courier.
//!
//! This crate provides shared functionality used across all Courier crates:
//!
//! - **Configuration**: Loading, validation, and management of config files
//! - **Types**: Recipients, outbound messages, and dispatch results
//! - **Utilities**: Path resolution and secret handling

pub mod config;
pub mod error;
pub mod paths;
pub mod secret;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use secret::SecretString;
pub use types::*;
