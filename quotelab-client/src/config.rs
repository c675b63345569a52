//! Client configuration.
//!
//! The API key is always supplied here, explicitly, by the caller — there is
//! no ambient key lookup anywhere in the workspace. Construct in code with
//! [`ClientConfig::new`] or load from a TOML file the caller owns.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

fn default_timeout_secs() -> u64 {
    30
}

/// Configuration for [`crate::QuoteClient`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// API key sent as the `apikey` query parameter on every request.
    pub api_key: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_with_default_timeout() {
        let config = ClientConfig::from_toml_str(r#"api_key = "demo""#).unwrap();
        assert_eq!(config.api_key, "demo");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn toml_overrides_timeout() {
        let config =
            ClientConfig::from_toml_str("api_key = \"demo\"\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn missing_key_is_an_error() {
        assert!(ClientConfig::from_toml_str("timeout_secs = 5").is_err());
    }
}
