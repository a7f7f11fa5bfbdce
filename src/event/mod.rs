//! Business event model.
//!
//! Events arrive as JSON documents exported by the ERP when a lifecycle
//! action fires. Only invoice-validation events on sales invoices are
//! relevant to this crate; everything else is ignored by the notifier.

mod invoice;

#[cfg(test)]
mod event_tests;

pub use invoice::{Invoice, Thirdparty};

use serde::Deserialize;

/// Action code fired when a draft sales invoice is finalized.
pub const INVOICE_VALIDATED: &str = "BILL_VALIDATE";

/// Element type of a customer (sales) invoice.
pub const INVOICE_ELEMENT: &str = "facture";

/// A business event exported by the ERP.
///
/// The document is produced by a foreign system, so unknown actions and
/// extra fields are expected and must not be treated as errors.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessEvent {
    /// Event action code (e.g. `BILL_VALIDATE`).
    pub action: String,

    /// Element type of the event's subject (e.g. `facture`).
    #[serde(default)]
    pub element: Option<String>,

    /// The invoice the event refers to, if the subject is an invoice.
    #[serde(default)]
    pub invoice: Option<Invoice>,

    /// The customer record attached to the invoice.
    #[serde(default)]
    pub thirdparty: Option<Thirdparty>,
}

impl BusinessEvent {
    /// Returns true if this is a validation event for a sales invoice.
    #[must_use]
    pub fn is_invoice_validation(&self) -> bool {
        self.action == INVOICE_VALIDATED && self.element.as_deref() == Some(INVOICE_ELEMENT)
    }

    /// Parses an event from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or does not
    /// carry the `action` field.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses an event from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the document is malformed.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
