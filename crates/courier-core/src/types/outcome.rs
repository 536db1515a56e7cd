//! Per-channel outcomes and the aggregate dispatch result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The verdict for one channel's delivery attempt.
///
/// Channels that were not invoked produce no outcome entry at all;
/// absence is not failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChannelOutcome {
    /// The channel reported the whole send as delivered.
    Succeeded,

    /// The channel failed; `reason` is human-readable.
    Failed {
        /// Why the channel failed.
        reason: String,
    },
}

impl ChannelOutcome {
    /// Create a failed outcome.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Whether the channel succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// The failure reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Succeeded => None,
            Self::Failed { reason } => Some(reason),
        }
    }
}

/// Aggregate result of one dispatch call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    /// True unless every invoked channel failed.
    ///
    /// Partial success counts as overall success; inspect `outcomes`
    /// to discover which channels failed.
    pub success: bool,

    /// Combined failure description, present only when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Per-channel outcomes, keyed by channel identifier. Populated for
    /// every invoked channel regardless of aggregate success.
    #[serde(default)]
    pub outcomes: BTreeMap<String, ChannelOutcome>,
}

impl DispatchResult {
    /// A failed result with no invoked channels.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            outcomes: BTreeMap::new(),
        }
    }

    /// The outcome recorded for a channel, if it was invoked.
    pub fn outcome(&self, channel: &str) -> Option<&ChannelOutcome> {
        self.outcomes.get(channel)
    }
}
