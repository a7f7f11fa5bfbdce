//! Trigger entry point: turns a business event into a ticket request.
//!
//! [`Notifier::handle_event`] is the piece the ERP hook pipeline calls.
//! It is deliberately infallible: whatever happens (irrelevant event,
//! missing configuration, unreachable service), the caller gets an
//! [`Outcome`] and a log line, never an error. The hook pipeline is shared
//! with unrelated modules and must keep running regardless of this one.

use url::Url;

use crate::config::ValidatedConfig;
use crate::event::{BusinessEvent, INVOICE_ELEMENT};
use crate::payload::TicketRequest;
use crate::webhook::{
    DispatchError, Feedback, HttpClient, ReqwestClient, TicketDispatcher, interpret_response,
};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;

/// Relay settings the notifier consults before dispatching.
///
/// URL and key are optional on purpose: an unconfigured relay is a valid
/// state that results in skipped notifications, not errors.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    /// Master enable flag for the integration.
    pub enabled: bool,

    /// Raffle service endpoint.
    pub api_url: Option<Url>,

    /// Bearer credential for the raffle service.
    pub api_key: Option<String>,

    /// Log the payload without sending it.
    pub dry_run: bool,
}

impl From<&ValidatedConfig> for RelaySettings {
    fn from(config: &ValidatedConfig) -> Self {
        Self {
            enabled: config.enabled,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            dry_run: config.dry_run,
        }
    }
}

/// Why an event produced no ticket request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The event's action is not an invoice validation.
    OtherAction,
    /// The integration is disabled in configuration.
    Disabled,
    /// The event's subject is not a sales invoice.
    NotASalesInvoice,
    /// No raffle service URL is configured.
    MissingUrl,
    /// No API key is configured.
    MissingApiKey,
    /// The HTTP client could not be constructed.
    ClientUnavailable,
    /// The event carries no invoice record.
    MissingInvoice,
    /// The event carries no customer record.
    MissingThirdparty,
    /// Dry-run mode: the payload was logged instead of sent.
    DryRun,
}

impl SkipReason {
    /// Short explanation used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OtherAction => "event action is not an invoice validation",
            Self::Disabled => "raffle integration is disabled",
            Self::NotASalesInvoice => "event subject is not a sales invoice",
            Self::MissingUrl => "no raffle service URL configured",
            Self::MissingApiKey => "no API key configured",
            Self::ClientUnavailable => "HTTP client unavailable",
            Self::MissingInvoice => "event carries no invoice record",
            Self::MissingThirdparty => "event carries no customer record",
            Self::DryRun => "dry-run mode, payload logged but not sent",
        }
    }
}

/// Result of handing an event to the notifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing was sent; the reason says why. A skip is a normal,
    /// neutral result, not a failure.
    Skipped(SkipReason),
    /// A request was sent (or its transport failed); the feedback is what
    /// the operator should see.
    Completed(Feedback),
}

/// Relays invoice-validation events to the raffle service.
///
/// # Type Parameters
///
/// - `C`: The HTTP client implementation. `None` models a runtime without
///   an HTTP capability, which downgrades every notification to a skip.
#[derive(Debug)]
pub struct Notifier<C = ReqwestClient> {
    settings: RelaySettings,
    client: Option<C>,
}

impl Notifier<ReqwestClient> {
    /// Builds a production notifier from the validated configuration.
    ///
    /// A failed HTTP client construction is logged and absorbed; the
    /// resulting notifier skips every event instead of erroring.
    #[must_use]
    pub fn from_config(config: &ValidatedConfig) -> Self {
        let client = match ReqwestClient::with_timeouts(
            config.connect_timeout,
            config.request_timeout,
        ) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to construct HTTP client: {e}");
                None
            }
        };

        Self::new(RelaySettings::from(config), client)
    }
}

impl<C> Notifier<C> {
    /// Creates a notifier from settings and an optional HTTP client.
    #[must_use]
    pub const fn new(settings: RelaySettings, client: Option<C>) -> Self {
        Self { settings, client }
    }

    /// Returns the relay settings.
    #[must_use]
    pub const fn settings(&self) -> &RelaySettings {
        &self.settings
    }
}

impl<C: HttpClient> Notifier<C> {
    /// Handles a business event fired by the ERP.
    ///
    /// Never returns an error: irrelevant events and unmet preconditions
    /// are skips, and delivery problems are reported as Error-severity
    /// feedback. Preconditions are checked in order: action, enable flag,
    /// subject type, URL, API key, HTTP capability, records.
    pub async fn handle_event(&self, event: &BusinessEvent) -> Outcome {
        // Fail fast if not the target action.
        if event.action != crate::event::INVOICE_VALIDATED {
            return self.skip(SkipReason::OtherAction);
        }

        if !self.settings.enabled {
            return self.skip(SkipReason::Disabled);
        }

        if event.element.as_deref() != Some(INVOICE_ELEMENT) {
            return self.skip(SkipReason::NotASalesInvoice);
        }

        let Some(url) = self.settings.api_url.clone() else {
            return self.skip(SkipReason::MissingUrl);
        };

        let Some(api_key) = self.settings.api_key.clone() else {
            return self.skip(SkipReason::MissingApiKey);
        };

        let Some(client) = &self.client else {
            return self.skip(SkipReason::ClientUnavailable);
        };

        let Some(invoice) = &event.invoice else {
            return self.skip(SkipReason::MissingInvoice);
        };

        let Some(thirdparty) = &event.thirdparty else {
            return self.skip(SkipReason::MissingThirdparty);
        };

        let payload = TicketRequest::from_event(invoice, thirdparty);

        tracing::debug!(
            reference = %payload.reference,
            "Invoice validation detected, notifying raffle service"
        );

        if self.settings.dry_run {
            let body = serde_json::to_string(&payload)
                .unwrap_or_else(|e| format!("<unserializable payload: {e}>"));
            tracing::info!(payload = %body, "Dry-run: ticket request not sent");
            return Outcome::Skipped(SkipReason::DryRun);
        }

        let dispatcher = TicketDispatcher::new(client, url, api_key);
        let feedback = match dispatcher.dispatch(&payload).await {
            Ok(response) => interpret_response(&response),
            Err(DispatchError::Http(e)) => {
                tracing::error!("Ticket request failed: {e}");
                Feedback::from_transport_failure(&e)
            }
            Err(e) => {
                // Serialization or credential problems. Still isolated from
                // the caller, surfaced as error feedback.
                tracing::error!("Ticket request could not be built: {e}");
                Feedback::from_dispatch_failure(&e)
            }
        };

        log_feedback(&feedback);
        Outcome::Completed(feedback)
    }

    fn skip(&self, reason: SkipReason) -> Outcome {
        tracing::debug!("Skipping notification: {}", reason.as_str());
        Outcome::Skipped(reason)
    }
}

/// Logs feedback at a level matching its severity.
fn log_feedback(feedback: &Feedback) {
    match feedback.severity {
        crate::webhook::Severity::Success => tracing::info!("{}", feedback.message),
        crate::webhook::Severity::Warning => tracing::warn!("{}", feedback.message),
        crate::webhook::Severity::Error => tracing::error!("{}", feedback.message),
    }
}
