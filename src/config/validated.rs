//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config, or [`ValidatedConfig::load`] to read the file named on the
/// CLI first.
///
/// The raffle URL and API key remain optional after validation. Missing
/// configuration is a reason to skip the notification, not a startup
/// failure. A URL that IS present must parse, though.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Master enable flag for the integration
    pub enabled: bool,

    /// Raffle service webhook URL
    pub api_url: Option<Url>,

    /// API key sent as a bearer token
    pub api_key: Option<String>,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Total request timeout
    pub request_timeout: Duration,

    /// Path to the event JSON document (`None` = stdin)
    pub event: Option<PathBuf>,

    /// Dry-run mode (log the payload without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url_str = self
            .api_url
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let event_str = self
            .event
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());

        // The API key is a credential; only report whether it is set.
        write!(
            f,
            "Config {{ url: {url_str}, api_key: {}, enabled: {}, timeouts: {}s/{}s, \
             event: {event_str}, dry_run: {} }}",
            if self.api_key.is_some() { "set" } else { "unset" },
            self.enabled,
            self.connect_timeout.as_secs(),
            self.request_timeout.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// CLI arguments take precedence over TOML config values. Empty URL or
    /// API key strings normalize to "not configured".
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A provided URL cannot be parsed
    /// - A timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api_url = Self::resolve_url(cli, toml)?;
        let api_key = Self::resolve_api_key(cli, toml);
        let enabled = toml
            .and_then(|t| t.raffle.enabled)
            .unwrap_or(defaults::ENABLED);

        let connect_timeout = Self::resolve_timeout(
            "connect_timeout",
            toml.and_then(|t| t.http.connect_timeout),
            defaults::CONNECT_TIMEOUT_SECS,
        )?;
        let request_timeout = Self::resolve_timeout(
            "request_timeout",
            toml.and_then(|t| t.http.request_timeout),
            defaults::REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            enabled,
            api_url,
            api_key,
            connect_timeout,
            request_timeout,
            event: Self::resolve_event(cli),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Url>, ConfigError> {
        // CLI takes precedence; empty strings count as not configured
        let url_str = non_empty(cli.url.as_deref())
            .or_else(|| non_empty(toml.and_then(|t| t.raffle.url.as_deref())));

        let Some(url_str) = url_str else {
            return Ok(None);
        };

        Url::parse(url_str)
            .map(Some)
            .map_err(|e| ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: e.to_string(),
            })
    }

    fn resolve_api_key(cli: &Cli, toml: Option<&TomlConfig>) -> Option<String> {
        non_empty(cli.api_key.as_deref())
            .or_else(|| non_empty(toml.and_then(|t| t.raffle.api_key.as_deref())))
            .map(ToString::to_string)
    }

    fn resolve_timeout(
        field: &'static str,
        toml_secs: Option<u64>,
        default_secs: u64,
    ) -> Result<Duration, ConfigError> {
        let seconds = toml_secs.unwrap_or(default_secs);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_event(cli: &Cli) -> Option<PathBuf> {
        // "-" is the conventional spelling for stdin
        cli.event
            .as_ref()
            .filter(|p| p.as_os_str() != "-")
            .cloned()
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
