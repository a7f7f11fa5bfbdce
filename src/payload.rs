//! Ticket request payload sent to the raffle service.

use serde::Serialize;

use crate::event::{Invoice, Thirdparty};

/// The flat JSON body POSTed to the raffle service on invoice validation.
///
/// The service issues raffle tickets proportional to `total_amount` and
/// deduplicates on `facture_id` (falling back to `ref` for exports that
/// predate the numeric id).
///
/// Missing source fields are defaulted rather than rejected: the relay must
/// still notify for partially filled customer records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketRequest {
    /// Public invoice reference.
    #[serde(rename = "ref")]
    pub reference: String,

    /// Internal invoice id, omitted when the export does not carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facture_id: Option<i64>,

    /// Internal customer id.
    pub customer_id: i64,

    /// Tax identification (idprof1, then idprof2, then the customer id).
    pub customer_identification: String,

    /// Customer display name.
    pub customer_name: String,

    /// Contact email.
    pub customer_email: String,

    /// Contact phone number.
    pub customer_phone: String,

    /// Postal address.
    pub customer_address: String,

    /// Invoice total, taxes included.
    pub total_amount: f64,
}

impl TicketRequest {
    /// Builds the payload from an invoice and its customer record.
    #[must_use]
    pub fn from_event(invoice: &Invoice, customer: &Thirdparty) -> Self {
        Self {
            reference: invoice.reference.clone().unwrap_or_default(),
            facture_id: invoice.id,
            customer_id: customer.id,
            customer_identification: customer.identification(),
            customer_name: customer.name.clone().unwrap_or_default(),
            customer_email: customer.email.clone().unwrap_or_default(),
            customer_phone: customer.phone.clone().unwrap_or_default(),
            customer_address: customer.address.clone().unwrap_or_default(),
            total_amount: invoice.total_ttc.unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> Invoice {
        Invoice {
            id: Some(42),
            reference: Some("FA2024-0001".to_string()),
            total_ttc: Some(250.0),
        }
    }

    fn customer() -> Thirdparty {
        Thirdparty {
            id: 7,
            name: Some("Juan Perez".to_string()),
            email: Some("juan@example.com".to_string()),
            phone: Some("0999999999".to_string()),
            address: Some("Av. Principal 123".to_string()),
            idprof1: Some("0912345678".to_string()),
            idprof2: None,
        }
    }

    #[test]
    fn builds_full_payload() {
        let request = TicketRequest::from_event(&invoice(), &customer());

        assert_eq!(request.reference, "FA2024-0001");
        assert_eq!(request.facture_id, Some(42));
        assert_eq!(request.customer_id, 7);
        assert_eq!(request.customer_identification, "0912345678");
        assert_eq!(request.customer_name, "Juan Perez");
        assert_eq!(request.total_amount, 250.0);
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let invoice = Invoice::default();
        let customer = Thirdparty {
            id: 7,
            name: None,
            email: None,
            phone: None,
            address: None,
            idprof1: None,
            idprof2: None,
        };

        let request = TicketRequest::from_event(&invoice, &customer);

        assert_eq!(request.reference, "");
        assert_eq!(request.facture_id, None);
        assert_eq!(request.customer_identification, "7");
        assert_eq!(request.customer_name, "");
        assert_eq!(request.customer_email, "");
        assert_eq!(request.total_amount, 0.0);
    }

    #[test]
    fn serializes_ref_under_wire_name() {
        let json = serde_json::to_value(TicketRequest::from_event(&invoice(), &customer()))
            .expect("payload serializes");

        assert_eq!(json["ref"], "FA2024-0001");
        assert_eq!(json["facture_id"], 42);
        assert_eq!(json["total_amount"], 250.0);
        assert!(json.get("reference").is_none());
    }

    #[test]
    fn omits_facture_id_when_absent() {
        let mut inv = invoice();
        inv.id = None;

        let json =
            serde_json::to_value(TicketRequest::from_event(&inv, &customer())).expect("serializes");

        assert!(json.get("facture_id").is_none());
    }
}
