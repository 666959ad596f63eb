//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Generative-language API configuration.
///
/// The presence of an API key is what selects live behavior; without
/// one the whole session runs on the offline fallbacks.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key; absent means offline mode.
    pub api_key: Option<Secret<String>>,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Trailing ledger messages sent as interrogation context.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a live API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::invalid_value("ai.model", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::invalid_value(
                "ai.timeout_secs",
                "must be positive",
            ));
        }
        if self.history_window == 0 {
            return Err(ValidationError::invalid_value(
                "ai.history_window",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            history_window: default_history_window(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_history_window() -> usize {
    8
}
