//! Serde round-trip and tolerance tests for the wire-facing models.

use super::*;

#[test]
fn test_event_parses_full_payload() {
    let json = r#"{
        "id": "evt_123",
        "type": "invoice.payment_succeeded",
        "created": 1700000000,
        "data": {
            "object": {
                "amount_paid": 1050,
                "customer_email": "a@x.com",
                "currency": "usd"
            }
        }
    }"#;

    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.id, "evt_123");
    assert_eq!(event.event_type, "invoice.payment_succeeded");
    assert_eq!(event.created, 1_700_000_000);
    assert_eq!(event.data.object.amount_paid, Some(1050));
    assert_eq!(event.data.object.customer_email.as_deref(), Some("a@x.com"));
}

#[test]
fn test_event_tolerates_missing_optional_fields() {
    let json = r#"{
        "id": "evt_456",
        "type": "customer.source.created",
        "created": 1700000000,
        "data": {"object": {}}
    }"#;

    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.data.object.amount_paid, None);
    assert_eq!(event.data.object.customer_email, None);
}

#[test]
fn test_event_rejects_missing_mandatory_fields() {
    // No `created`.
    let json = r#"{"id": "evt_789", "type": "customer.source.created"}"#;
    assert!(serde_json::from_str::<Event>(json).is_err());

    // No `type`.
    let json = r#"{"id": "evt_789", "created": 1700000000}"#;
    assert!(serde_json::from_str::<Event>(json).is_err());

    // No `id`.
    let json = r#"{"type": "customer.source.created", "created": 1700000000}"#;
    assert!(serde_json::from_str::<Event>(json).is_err());
}

#[test]
fn test_invoice_parses_and_tolerates_missing_optionals() {
    let json = r#"{"total": 250000, "status": "open"}"#;
    let invoice: Invoice = serde_json::from_str(json).unwrap();
    assert_eq!(invoice.total, 250_000);
    assert_eq!(invoice.customer_email, None);
    assert_eq!(invoice.hosted_invoice_url, None);
    assert_eq!(invoice.collection_method, "");
}

#[test]
fn test_invoice_rejects_missing_total() {
    let json = r#"{"status": "open", "customer_email": "b@x.com"}"#;
    assert!(serde_json::from_str::<Invoice>(json).is_err());
}

#[test]
fn test_account_set_roundtrip_preserves_order() {
    let json = r#"{"zulu": "k1", "alpha": "k2", "mike": "k3"}"#;
    let set: AccountSet = serde_json::from_str(json).unwrap();

    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["zulu", "alpha", "mike"]);

    let back = serde_json::to_string(&set).unwrap();
    assert_eq!(back, r#"{"zulu":"k1","alpha":"k2","mike":"k3"}"#);
}

#[test]
fn test_report_result_roundtrip_preserves_order_and_lines() {
    let mut result = ReportResult::new();
    result.insert("zulu", vec!["event line".to_string(), "invoice line".to_string()]);
    result.insert("alpha", vec![]);

    let json = serde_json::to_string(&result).unwrap();
    let parsed: ReportResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, result);
    let names: Vec<&str> = parsed.account_names().collect();
    assert_eq!(names, vec!["zulu", "alpha"]);
    assert_eq!(
        parsed.get("zulu"),
        Some(&["event line".to_string(), "invoice line".to_string()][..])
    );
}
