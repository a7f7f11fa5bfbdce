//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Raffle service configuration section
    #[serde(default)]
    pub raffle: RaffleSection,

    /// HTTP timeout configuration section
    #[serde(default)]
    pub http: HttpSection,
}

/// Raffle service configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RaffleSection {
    /// Webhook URL of the raffle service
    pub url: Option<String>,

    /// API key sent as a bearer token
    pub api_key: Option<String>,

    /// Master enable flag for the integration (default: true)
    pub enabled: Option<bool>,
}

/// HTTP timeout configuration section.
///
/// Kept short on purpose: the relay runs inline with invoice validation,
/// so both timeouts default to single-digit seconds.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Connection timeout in seconds
    pub connect_timeout: Option<u64>,

    /// Total request timeout in seconds
    pub request_timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Raffle Relay Configuration File

[raffle]
# Webhook URL of the raffle service (e.g. https://example.com/raffles/api/webhook/)
# url = "https://example.com/raffles/api/webhook/"

# API key configured in the raffle service admin
# api_key = "your-key-here"

# Master enable flag. When false, events are read and ignored.
enabled = true

[http]
# Connection timeout in seconds (default: 5)
# connect_timeout = 5

# Total request timeout in seconds (default: 10)
# request_timeout = 10
"#
    .to_string()
}
