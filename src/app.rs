//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use raffle_relay::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    use raffle_relay::notify::Outcome;
    use raffle_relay::webhook::Severity;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid config file, bad URL, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - unreadable event, delivery failure, etc.
    ///
    /// Note: This is a function rather than a constant because
    /// `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Maps a notification outcome to the process exit code.
    ///
    /// Skips and non-error feedback (including duplicate warnings) are
    /// success: the relay did its job. Only Error-severity feedback is a
    /// runtime failure.
    pub fn from_outcome(outcome: &Outcome) -> ExitCode {
        match outcome {
            Outcome::Skipped(_) => SUCCESS,
            Outcome::Completed(feedback) => {
                if feedback.severity == Severity::Error {
                    runtime_error()
                } else {
                    SUCCESS
                }
            }
        }
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if matches!(error, ConfigError::FileRead { .. }) {
        eprintln!("\nRun 'raffle-relay init' to generate a configuration template.");
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::exit_code;
    use raffle_relay::notify::{Outcome, SkipReason};
    use raffle_relay::webhook::{HttpError, HttpResponse, interpret_response};
    use std::process::ExitCode;

    fn feedback_for(status: http::StatusCode, body: &str) -> Outcome {
        Outcome::Completed(interpret_response(&HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        )))
    }

    #[test]
    fn skips_exit_successfully() {
        let code = exit_code::from_outcome(&Outcome::Skipped(SkipReason::Disabled));
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn success_feedback_exits_successfully() {
        let outcome = feedback_for(http::StatusCode::CREATED, r#"{"tickets_generated": 1}"#);
        let code = exit_code::from_outcome(&outcome);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn duplicate_warning_exits_successfully() {
        let outcome = feedback_for(http::StatusCode::CONFLICT, "{}");
        let code = exit_code::from_outcome(&outcome);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn error_feedback_exits_with_runtime_error() {
        let outcome = Outcome::Completed(
            raffle_relay::webhook::Feedback::from_transport_failure(&HttpError::Timeout),
        );
        let code = exit_code::from_outcome(&outcome);
        assert_eq!(
            format!("{code:?}"),
            format!("{:?}", exit_code::runtime_error())
        );
    }
}
