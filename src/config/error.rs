//! Configuration error types.

use thiserror::Error;

/// Errors that occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying loader failure (missing variable, parse failure).
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors that occur during semantic validation of loaded values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required setting is missing.
    #[error("missing required setting: {0}")]
    MissingRequired(&'static str),

    /// A setting has an invalid value.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_usefully() {
        assert_eq!(
            ValidationError::MissingRequired("AI__API_KEY").to_string(),
            "missing required setting: AI__API_KEY"
        );
        assert_eq!(
            ValidationError::invalid_value("timeout_secs", "must be positive").to_string(),
            "invalid value for timeout_secs: must be positive"
        );
    }
}
