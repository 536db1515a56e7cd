//! Send command.

use clap::Args;
use courier_channels::{Dispatcher, TransportRegistry};
use courier_core::config::Config;
use courier_core::types::{OutboundMessage, Recipient};
use std::path::PathBuf;
use tracing::info;

/// Send command arguments.
#[derive(Args)]
pub struct SendArgs {
    /// Message body text
    #[arg(short, long)]
    pub body: String,

    /// Path to a JSON file containing the recipient list
    #[arg(short, long)]
    pub recipients: PathBuf,

    /// Delivery channel (repeatable, e.g. --channel email --channel whatsapp)
    #[arg(short, long = "channel")]
    pub channels: Vec<String>,
}

/// Run the send command.
pub async fn run(args: SendArgs, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    config.validate()?;

    let registry = TransportRegistry::from_config(&config)?;
    let dispatcher = Dispatcher::new(registry);

    let recipients = read_recipients(&args.recipients)?;
    info!(
        recipients = recipients.len(),
        channels = ?args.channels,
        "dispatching message"
    );

    let message = OutboundMessage {
        body: args.body,
        recipients,
        channels: args.channels,
    };

    let result = dispatcher.dispatch(&message).await;

    for (channel, outcome) in &result.outcomes {
        match outcome.reason() {
            None => println!("{channel}: sent"),
            Some(reason) => println!("{channel}: failed ({reason})"),
        }
    }

    if !result.success {
        let error = result
            .error
            .unwrap_or_else(|| "dispatch failed".to_string());
        anyhow::bail!(error);
    }

    Ok(())
}

/// Read a recipient list from a JSON file.
fn read_recipients(path: &PathBuf) -> anyhow::Result<Vec<Recipient>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read recipients file {:?}: {}", path, e))?;
    let recipients: Vec<Recipient> = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid recipients file {:?}: {}", path, e))?;
    Ok(recipients)
}
