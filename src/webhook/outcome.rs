//! Response interpretation.
//!
//! Maps the raffle service's HTTP answer to the user-facing feedback the
//! ERP operator sees after validating an invoice. Every status the service
//! is known to emit has a dedicated message; anything else degrades to a
//! generic error carrying the code and a body snippet.

use http::StatusCode;
use serde::Deserialize;

use super::{HttpError, HttpResponse};

/// Maximum length of a raw body snippet quoted in feedback messages.
const BODY_SNIPPET_MAX: usize = 200;

/// Severity of a feedback message, mirroring the host's message classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Tickets were issued (or legitimately none were due).
    Success,
    /// Delivered, but the service flagged something (duplicate, disabled).
    Warning,
    /// Delivery failed or the service reported a fault.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A user-facing message describing the result of a ticket request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Message severity.
    pub severity: Severity,
    /// Human-readable message text.
    pub message: String,
}

impl Feedback {
    fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Feedback for a transport failure (connection, timeout).
    #[must_use]
    pub fn from_transport_failure(error: &HttpError) -> Self {
        Self::error(format!("Could not reach the raffle service: {error}"))
    }

    /// Feedback for a request that could not even be built or sent.
    #[must_use]
    pub fn from_dispatch_failure(error: &super::DispatchError) -> Self {
        Self::error(format!("Could not send ticket request: {error}"))
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Successful answer body: tickets issued for this invoice.
#[derive(Debug, Deserialize)]
struct TicketReceipt {
    tickets_generated: u64,
    #[serde(default)]
    ticket_numbers: Vec<u64>,
}

/// Conflict answer body: the invoice was already processed.
#[derive(Debug, Deserialize)]
struct DuplicateNotice {
    #[serde(default)]
    tickets_previously_generated: Option<u64>,
}

/// Server fault body: the service reports its own error text.
#[derive(Debug, Deserialize)]
struct ServerFault {
    #[serde(default)]
    error: Option<String>,
}

/// Interprets the raffle service's response into user-facing feedback.
#[must_use]
pub fn interpret_response(response: &HttpResponse) -> Feedback {
    match response.status {
        StatusCode::OK | StatusCode::CREATED => interpret_receipt(response),
        StatusCode::UNAUTHORIZED => {
            Feedback::error("Raffle service rejected the API key (authentication failed)")
        }
        StatusCode::CONFLICT => interpret_duplicate(response),
        StatusCode::INTERNAL_SERVER_ERROR => interpret_server_fault(response),
        StatusCode::SERVICE_UNAVAILABLE => {
            Feedback::warning("Raffle integration is currently disabled on the service side")
        }
        status => Feedback::error(format!(
            "Raffle service returned HTTP {}: {}",
            status.as_u16(),
            body_snippet(response)
        )),
    }
}

fn interpret_receipt(response: &HttpResponse) -> Feedback {
    let Ok(receipt) = serde_json::from_slice::<TicketReceipt>(&response.body) else {
        // Delivered, but the answer is unreadable. Not a fault: the service
        // accepted the invoice.
        return Feedback::warning(
            "Ticket request delivered, but the raffle service answer could not be parsed",
        );
    };

    if receipt.tickets_generated == 0 {
        return Feedback::success("No raffle tickets were due for this invoice");
    }

    if receipt.ticket_numbers.is_empty() {
        return Feedback::success(format!(
            "Raffle tickets issued: {}",
            receipt.tickets_generated
        ));
    }

    let numbers = receipt
        .ticket_numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Feedback::success(format!(
        "Raffle tickets issued: {} (numbers: {numbers})",
        receipt.tickets_generated
    ))
}

fn interpret_duplicate(response: &HttpResponse) -> Feedback {
    let previously_generated = serde_json::from_slice::<DuplicateNotice>(&response.body)
        .ok()
        .and_then(|notice| notice.tickets_previously_generated);

    previously_generated.map_or_else(
        || Feedback::warning("Invoice was already processed by the raffle service"),
        |count| {
            Feedback::warning(format!(
                "Invoice was already processed by the raffle service; \
                 {count} ticket(s) previously issued"
            ))
        },
    )
}

fn interpret_server_fault(response: &HttpResponse) -> Feedback {
    let server_text = serde_json::from_slice::<ServerFault>(&response.body)
        .ok()
        .and_then(|fault| fault.error);

    match server_text {
        Some(text) => Feedback::error(format!("Raffle service error: {text}")),
        None => Feedback::error(format!("Raffle service error: {}", body_snippet(response))),
    }
}

fn body_snippet(response: &HttpResponse) -> String {
    let text = response.body_text().unwrap_or("<non-utf8 body>").trim();
    if text.is_empty() {
        return "<no body>".to_string();
    }

    let mut snippet: String = text.chars().take(BODY_SNIPPET_MAX).collect();
    if snippet.len() < text.len() {
        snippet.push_str("...");
    }
    snippet
}
