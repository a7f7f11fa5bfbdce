//! Error types for HTTP dispatch.

use thiserror::Error;

/// Error type for transport-level HTTP failures.
///
/// Describes what went wrong without dictating recovery strategy. The
/// notifier converts these into user-facing feedback.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This indicates a configuration error rather than a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    ///
    /// Maps to the "no HTTP capability" precondition: the relay skips
    /// dispatch entirely instead of failing.
    #[error("HTTP client unavailable: {0}")]
    ClientUnavailable(String),
}

/// Error type for building and sending a ticket request.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The payload could not be serialized to JSON.
    #[error("Failed to serialize ticket request: {0}")]
    Payload(#[from] serde_json::Error),

    /// The API key cannot be carried in an Authorization header.
    #[error("API key is not a valid header value")]
    Credential,

    /// Transport failure while sending the request.
    #[error(transparent)]
    Http(#[from] HttpError),
}
