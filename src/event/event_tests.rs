//! Tests for event parsing and classification.

use super::{BusinessEvent, INVOICE_ELEMENT, INVOICE_VALIDATED, Thirdparty};

fn full_event_json() -> &'static str {
    r#"{
        "action": "BILL_VALIDATE",
        "element": "facture",
        "invoice": {"id": 42, "ref": "FA2024-0001", "total_ttc": 250.0},
        "thirdparty": {
            "id": 7,
            "name": "Juan Perez",
            "email": "juan@example.com",
            "phone": "0999999999",
            "address": "Av. Principal 123",
            "idprof1": "0912345678"
        }
    }"#
}

mod parsing {
    use super::*;

    #[test]
    fn parses_full_event() {
        let event = BusinessEvent::from_json(full_event_json()).unwrap();

        assert_eq!(event.action, INVOICE_VALIDATED);
        assert_eq!(event.element.as_deref(), Some(INVOICE_ELEMENT));

        let invoice = event.invoice.unwrap();
        assert_eq!(invoice.id, Some(42));
        assert_eq!(invoice.reference.as_deref(), Some("FA2024-0001"));
        assert_eq!(invoice.total_ttc, Some(250.0));

        let customer = event.thirdparty.unwrap();
        assert_eq!(customer.id, 7);
        assert_eq!(customer.name.as_deref(), Some("Juan Perez"));
    }

    #[test]
    fn parses_event_with_only_action() {
        let event = BusinessEvent::from_json(r#"{"action": "ORDER_CREATE"}"#).unwrap();

        assert_eq!(event.action, "ORDER_CREATE");
        assert!(event.element.is_none());
        assert!(event.invoice.is_none());
        assert!(event.thirdparty.is_none());
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{"action": "BILL_VALIDATE", "element": "facture", "entity": 1, "userid": 3}"#;
        let event = BusinessEvent::from_json(json).unwrap();

        assert_eq!(event.action, INVOICE_VALIDATED);
    }

    #[test]
    fn missing_action_is_an_error() {
        assert!(BusinessEvent::from_json(r#"{"element": "facture"}"#).is_err());
    }

    #[test]
    fn parses_from_reader() {
        let event = BusinessEvent::from_reader(full_event_json().as_bytes()).unwrap();
        assert!(event.is_invoice_validation());
    }
}

mod classification {
    use super::*;

    #[test]
    fn invoice_validation_matches() {
        let event = BusinessEvent::from_json(full_event_json()).unwrap();
        assert!(event.is_invoice_validation());
    }

    #[test]
    fn other_action_does_not_match() {
        let json = r#"{"action": "BILL_UNVALIDATE", "element": "facture"}"#;
        let event = BusinessEvent::from_json(json).unwrap();
        assert!(!event.is_invoice_validation());
    }

    #[test]
    fn other_element_does_not_match() {
        let json = r#"{"action": "BILL_VALIDATE", "element": "facture_fourn"}"#;
        let event = BusinessEvent::from_json(json).unwrap();
        assert!(!event.is_invoice_validation());
    }

    #[test]
    fn missing_element_does_not_match() {
        let event = BusinessEvent::from_json(r#"{"action": "BILL_VALIDATE"}"#).unwrap();
        assert!(!event.is_invoice_validation());
    }
}

mod identification {
    use super::*;

    fn customer(idprof1: Option<&str>, idprof2: Option<&str>) -> Thirdparty {
        Thirdparty {
            id: 99,
            name: None,
            email: None,
            phone: None,
            address: None,
            idprof1: idprof1.map(ToString::to_string),
            idprof2: idprof2.map(ToString::to_string),
        }
    }

    #[test]
    fn prefers_idprof1() {
        let c = customer(Some("RUC-1"), Some("CED-2"));
        assert_eq!(c.identification(), "RUC-1");
    }

    #[test]
    fn falls_back_to_idprof2() {
        let c = customer(None, Some("CED-2"));
        assert_eq!(c.identification(), "CED-2");
    }

    #[test]
    fn empty_idprof1_counts_as_missing() {
        let c = customer(Some(""), Some("CED-2"));
        assert_eq!(c.identification(), "CED-2");
    }

    #[test]
    fn falls_back_to_customer_id() {
        let c = customer(None, None);
        assert_eq!(c.identification(), "99");
    }

    #[test]
    fn all_empty_falls_back_to_customer_id() {
        let c = customer(Some(""), Some(""));
        assert_eq!(c.identification(), "99");
    }
}
