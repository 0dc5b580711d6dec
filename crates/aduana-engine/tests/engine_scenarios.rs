//! End-to-end scenarios for the validation pipeline.
//!
//! Each scenario feeds a raw JSON document through normalize → evaluate →
//! aggregate and checks the report against the expected verdict.

use aduana_engine::{validate, OverallStatus, RuleStatus, RULE_COUNT};
use serde_json::{json, Value};

/// An invoice carrying every signal the checklist asks for.
fn complete_invoice() -> Value {
    json!({
        "Fields": [
            {"Fields": "InvoiceNumber", "Value": "F-2024-001"},
            {"Fields": "InvoiceDate", "Value": "2024-03-18"},
            {"Fields": "CountryOfOrigin", "Value": "China"},
            {"Fields": "Supplier", "Value": "ACME Trading Co."},
            {"Fields": "SupplierAddress", "Value": "88 Nanjing Road, Shanghái"},
            {"Fields": "Customer", "Value": "Importadora Andina SAS"},
            {"Fields": "CustomerAddress", "Value": "Carrera 7 #71-21, Bogotá"},
            {"Fields": "TotalInvoiceValue", "Value": "15200.00"},
            {"Fields": "Currency", "Value": "USD"},
            {"Fields": "Incoterm", "Value": "FOB"},
            {"Fields": "PaymentTerms", "Value": "Transferencia a 30 días"}
        ],
        "Table": [
            {"Description": "Tornillos de acero", "Quantity": 5000, "UnitPrice": "3.04"}
        ]
    })
}

/// Remove a named entry from the `Fields` array.
fn without_field(mut invoice: Value, name: &str) -> Value {
    if let Some(fields) = invoice["Fields"].as_array_mut() {
        fields.retain(|f| f["Fields"] != name);
    }
    invoice
}

#[test]
fn empty_document_fails_every_rule() {
    let report = validate(&json!({"Fields": [], "Table": []}));

    assert_eq!(report.total, RULE_COUNT);
    assert_eq!(report.ok, 0);
    assert_eq!(report.partial, 0);
    assert_eq!(report.error, RULE_COUNT);
    assert_eq!(report.overall_status, OverallStatus::NonCompliant);
    assert!(report.rules.iter().all(|r| r.status == RuleStatus::Error));
}

#[test]
fn complete_invoice_is_compliant() {
    let report = validate(&complete_invoice());

    assert_eq!(report.ok, RULE_COUNT);
    assert_eq!(report.overall_status, OverallStatus::Compliant);
    assert!(report.is_compliant());
}

#[test]
fn missing_supplier_address_downgrades_to_partial_compliance() {
    let report = validate(&without_field(complete_invoice(), "SupplierAddress"));

    let seller = &report.rules[3];
    assert_eq!(seller.name, "Datos del vendedor");
    assert_eq!(seller.status, RuleStatus::Partial);
    assert_eq!(report.partial, 1);
    assert_eq!(report.ok, RULE_COUNT - 1);
    assert_eq!(report.overall_status, OverallStatus::PartiallyCompliant);
}

#[test]
fn a_single_error_outranks_any_number_of_passes() {
    let report = validate(&without_field(complete_invoice(), "InvoiceNumber"));

    assert_eq!(report.rules[0].status, RuleStatus::Error);
    assert_eq!(report.rules[3].status, RuleStatus::Ok);
    assert_eq!(report.ok, RULE_COUNT - 1);
    assert_eq!(report.overall_status, OverallStatus::NonCompliant);
}

#[test]
fn currency_resolves_from_the_first_line_item_when_the_field_is_absent() {
    let mut invoice = without_field(complete_invoice(), "Currency");
    invoice["Table"][0]["Currency"] = json!("USD");

    let report = validate(&invoice);

    let currency = &report.rules[8];
    assert_eq!(currency.name, "Moneda");
    assert_eq!(currency.status, RuleStatus::Ok);
    assert!(currency.message.contains("USD"));
    assert_eq!(report.overall_status, OverallStatus::Compliant);
}

#[test]
fn rule_count_is_fixed_for_arbitrary_inputs() {
    let inputs = [
        json!({}),
        json!(null),
        json!("garbage"),
        json!({"Fields": "not an array"}),
        json!({"Table": {"Description": "not an array either"}}),
        json!({"Fields": [null, 3, "x"], "Table": [null]}),
        complete_invoice(),
    ];

    for input in inputs {
        let report = validate(&input);
        assert_eq!(report.rules.len(), RULE_COUNT, "input: {}", input);
        let ids: Vec<u32> = report.rules.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=RULE_COUNT as u32).collect::<Vec<_>>());
    }
}

#[test]
fn counts_always_satisfy_the_identity() {
    let inputs = [
        json!({}),
        complete_invoice(),
        without_field(complete_invoice(), "SupplierAddress"),
        without_field(complete_invoice(), "PaymentTerms"),
    ];

    for input in inputs {
        let report = validate(&input);
        assert_eq!(report.ok + report.partial + report.error, report.total);
        assert_eq!(report.total, report.rules.len());
    }
}

#[test]
fn validation_is_idempotent() {
    let invoice = without_field(complete_invoice(), "Incoterm");
    let first = validate(&invoice);
    let second = validate(&invoice);
    assert_eq!(first, second);
}

#[test]
fn dual_signal_matrix_for_the_buyer_rule() {
    let cases = [
        (Some("Importadora Andina"), Some("Carrera 7 #71-21"), RuleStatus::Ok),
        (Some("Importadora Andina"), None, RuleStatus::Partial),
        (None, Some("Carrera 7 #71-21"), RuleStatus::Partial),
        (None, None, RuleStatus::Error),
    ];

    for (customer, address, expected) in cases {
        let mut fields = Vec::new();
        if let Some(c) = customer {
            fields.push(json!({"Fields": "Customer", "Value": c}));
        }
        if let Some(a) = address {
            fields.push(json!({"Fields": "CustomerAddress", "Value": a}));
        }

        let report = validate(&json!({"Fields": fields}));
        let buyer = &report.rules[4];
        assert_eq!(buyer.name, "Datos del comprador");
        assert_eq!(
            buyer.status, expected,
            "customer={:?} address={:?}",
            customer, address
        );
    }
}

#[test]
fn origin_fallback_chain_is_consulted_in_order() {
    let report = validate(&json!({
        "Fields": [{"Fields": "PortOfLoading", "Value": "Shanghái"}]
    }));
    assert_eq!(report.rules[2].status, RuleStatus::Ok);
    assert!(report.rules[2].message.contains("Shanghái"));

    let report = validate(&json!({
        "Fields": [
            {"Fields": "PortOfLoading", "Value": "Shanghái"},
            {"Fields": "OriginCountryAddress", "Value": "Zhejiang, China"}
        ]
    }));
    assert!(report.rules[2].message.contains("Zhejiang"));
}

#[test]
fn report_serializes_to_the_wire_contract() {
    let report = validate(&complete_invoice());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["overallStatus"], "Cumple");
    assert_eq!(json["total"], 11);
    assert_eq!(json["ok"], 11);
    assert_eq!(json["partial"], 0);
    assert_eq!(json["error"], 0);
    assert_eq!(json["rules"].as_array().unwrap().len(), 11);
    assert_eq!(json["rules"][0]["id"], 1);
    assert_eq!(json["rules"][0]["name"], "Número de factura");
    assert_eq!(json["rules"][0]["status"], "OK");
}
