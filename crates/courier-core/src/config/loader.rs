//! Configuration loading and persistence.

use super::{Config, WhatsAppMode};
use crate::error::ConfigError;
use crate::paths;
use std::fs;
use std::path::Path;
use url::Url;

impl Config {
    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        Self::load(&path)
    }

    /// Load configuration from the default path, falling back to defaults
    /// when no config file exists yet.
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_default()
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Save configuration to the default path.
    pub fn save_default(&self) -> Result<(), ConfigError> {
        let path = paths::config_file()?;
        self.save(&path)
    }

    /// Save configuration to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Serialize to JSON5 string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 doesn't have a serializer, so we use serde_json with pretty print
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // 1. Enabled email channel needs credentials and a sender
        if let Some(email) = &self.channels.email {
            if email.enabled {
                if email.api_key.is_empty() {
                    errors.push("Email channel is enabled but api_key is empty".to_string());
                }
                if !email.from_address.contains('@') {
                    errors.push(format!(
                        "Email from_address '{}' is not a valid address",
                        email.from_address
                    ));
                }
            }
            if Url::parse(&email.api_url).is_err() {
                errors.push(format!("Email api_url '{}' is not a valid URL", email.api_url));
            }
        }

        // 2. Live WhatsApp needs Cloud API credentials; simulated mode needs nothing
        if let Some(whatsapp) = &self.channels.whatsapp {
            if whatsapp.enabled && whatsapp.mode == WhatsAppMode::Live {
                if whatsapp.phone_number_id.as_deref().unwrap_or("").is_empty() {
                    errors.push(
                        "WhatsApp channel is in live mode but phone_number_id is missing"
                            .to_string(),
                    );
                }
                if whatsapp.access_token.is_empty() {
                    errors.push(
                        "WhatsApp channel is in live mode but access_token is empty".to_string(),
                    );
                }
            }
            if Url::parse(&whatsapp.api_base).is_err() {
                errors.push(format!(
                    "WhatsApp api_base '{}' is not a valid URL",
                    whatsapp.api_base
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
