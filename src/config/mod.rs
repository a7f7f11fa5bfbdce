//! Configuration layer for Raffle Relay.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The raffle URL and API key accept CLI or TOML; the enable flag and the
//! HTTP timeouts are TOML-only.
//!
//! # Optional-by-design fields
//!
//! `raffle.url` and `raffle.api_key` are optional even after validation.
//! When either is missing the relay skips the notification (with a debug
//! log) instead of refusing to start. Empty strings normalize to "not
//! configured".

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
