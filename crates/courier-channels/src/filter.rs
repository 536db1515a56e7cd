//! Per-channel recipient eligibility filtering.

use courier_core::types::Recipient;
use std::fmt;

/// The contact field a channel requires from its recipients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Email address.
    Email,

    /// Phone number.
    Phone,
}

impl ContactField {
    /// Lowercase field name, as used in error reasons.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep only recipients whose relevant contact field is populated and
/// non-empty, preserving input order. Never fails; yields an empty vec
/// when no recipient qualifies.
pub fn eligible_recipients<'a>(
    recipients: &'a [Recipient],
    field: ContactField,
) -> Vec<&'a Recipient> {
    recipients
        .iter()
        .filter(|r| match field {
            ContactField::Email => r.has_email(),
            ContactField::Phone => r.has_phone(),
        })
        .collect()
}
