//! Aduana Engine: checklist validation for customs import invoices.
//!
//! Takes the raw JSON a document digitizer produces for an import invoice,
//! normalizes it into a queryable form, runs a fixed regulatory checklist
//! over it, and aggregates the results into a compliance report.
//!
//! The pipeline is strictly linear and pure:
//!
//! ```text
//! raw JSON → Normalizer → RuleEvaluator → Aggregator → ComplianceReport
//! ```
//!
//! Every call allocates its own normalized view, results, and report; there
//! is no shared state between calls, so concurrent use needs no locking.
//! Missing or malformed input never raises: absent collections degrade to
//! empty and absent signals classify as `ERROR`/`PARTIAL` on the affected
//! rule, always producing a complete report.
//!
//! # Example
//!
//! ```
//! use aduana_engine::{validate, OverallStatus};
//! use serde_json::json;
//!
//! let invoice = json!({
//!     "Fields": [
//!         {"Fields": "InvoiceNumber", "Value": "F-2024-001"},
//!         {"Fields": "Currency", "Value": "USD"}
//!     ],
//!     "Table": [{"Description": "Tornillos", "Quantity": 10}]
//! });
//!
//! let report = validate(&invoice);
//! assert_eq!(report.total, 11);
//! assert_eq!(report.overall_status, OverallStatus::NonCompliant);
//! ```
//!
//! A fully documented invoice passes every rule:
//!
//! ```
//! use aduana_engine::is_compliant;
//! use serde_json::json;
//!
//! let invoice = json!({
//!     "Fields": [
//!         {"Fields": "InvoiceNumber", "Value": "F-2024-001"},
//!         {"Fields": "InvoiceDate", "Value": "2024-03-18"},
//!         {"Fields": "CountryOfOrigin", "Value": "China"},
//!         {"Fields": "Supplier", "Value": "ACME SAS"},
//!         {"Fields": "SupplierAddress", "Value": "Calle 10 #5-51, Bogotá"},
//!         {"Fields": "Customer", "Value": "Importadora Andina"},
//!         {"Fields": "CustomerAddress", "Value": "Carrera 7 #71-21, Bogotá"},
//!         {"Fields": "TotalInvoiceValue", "Value": "1520.00"},
//!         {"Fields": "Currency", "Value": "USD"},
//!         {"Fields": "Incoterm", "Value": "FOB"},
//!         {"Fields": "PaymentTerms", "Value": "30 días"}
//!     ],
//!     "Table": [{"Description": "Tornillos", "Quantity": 10, "UnitPrice": "3.20"}]
//! });
//!
//! assert!(is_compliant(&invoice));
//! ```

mod catalog;
pub mod document;
pub mod evaluator;
pub mod report;
pub mod status;

pub use document::{normalize, LineItem, NormalizedInvoice, RawField, RawInvoice};
pub use evaluator::{evaluate, RULE_COUNT};
pub use report::{aggregate, ComplianceReport, RuleResult};
pub use status::{OverallStatus, RuleStatus};

/// Run the full pipeline over a raw JSON invoice document.
pub fn validate(raw: &serde_json::Value) -> ComplianceReport {
    let normalized = document::normalize(&document::RawInvoice::from_value(raw));
    report::aggregate(evaluator::evaluate(&normalized))
}

/// Whether the document satisfies every checklist requirement.
pub fn is_compliant(raw: &serde_json::Value) -> bool {
    validate(raw).is_compliant()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_on_empty_input() {
        let report = validate(&json!({}));
        assert_eq!(report.total, RULE_COUNT);
        assert_eq!(report.error, RULE_COUNT);
        assert_eq!(report.overall_status, OverallStatus::NonCompliant);
    }

    #[test]
    fn test_is_compliant_quick_check() {
        assert!(!is_compliant(&json!({})));
        assert!(!is_compliant(&json!({
            "Fields": [{"Fields": "InvoiceNumber", "Value": "F-001"}]
        })));
    }
}
