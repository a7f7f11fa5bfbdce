//! Application execution logic.
//!
//! Reads the exported business event, hands it to the notifier, and
//! reports the result.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use raffle_relay::config::ValidatedConfig;
use raffle_relay::event::BusinessEvent;
use raffle_relay::notify::{Notifier, Outcome};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
///
/// These cover the CLI's own input handling. Notification failures are NOT
/// errors: the notifier isolates them into its [`Outcome`].
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the event document.
    #[error("Failed to read event from '{}': {source}", path.display())]
    EventRead {
        /// Path to the event file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the event document from stdin.
    #[error("Failed to read event from stdin: {0}")]
    StdinRead(#[source] std::io::Error),

    /// The event document is not valid JSON.
    #[error("Failed to parse event: {0}")]
    EventParse(#[from] serde_json::Error),
}

/// Executes the relay once.
///
/// This function:
/// 1. Reads the event JSON from the configured file (or stdin)
/// 2. Builds the notifier from the configuration
/// 3. Hands the event to the notifier
/// 4. Reports the outcome to the operator
///
/// # Errors
///
/// Returns an error if the event document cannot be read or parsed.
pub async fn execute(config: ValidatedConfig) -> Result<Outcome, RunError> {
    let event = read_event(config.event.as_deref())?;

    let notifier = Notifier::from_config(&config);
    let outcome = notifier.handle_event(&event).await;

    report(&outcome);
    Ok(outcome)
}

/// Reads and parses the event document from a file or stdin.
fn read_event(path: Option<&Path>) -> Result<BusinessEvent, RunError> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| RunError::EventRead {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(RunError::StdinRead)?;
            buffer
        }
    };

    Ok(BusinessEvent::from_json(&content)?)
}

/// Reports the outcome on stdout for the operator.
///
/// The notifier already logs; this is the human-facing summary line.
fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Skipped(reason) => {
            println!("Skipped: {}", reason.as_str());
        }
        Outcome::Completed(feedback) => {
            println!("{feedback}");
        }
    }
}
