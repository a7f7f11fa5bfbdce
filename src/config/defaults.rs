//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// The integration is enabled unless the config file turns it off.
pub const ENABLED: bool = true;

/// Default connection timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default total request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout as Duration.
#[must_use]
pub const fn connect_timeout() -> Duration {
    Duration::from_secs(CONNECT_TIMEOUT_SECS)
}

/// Default total request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}
