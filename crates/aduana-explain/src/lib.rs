//! Explanation layer for invoice compliance reports.
//!
//! Turns a produced [`ComplianceReport`](aduana_engine::ComplianceReport)
//! into free-text commentary for the shipment operator. Two pieces:
//!
//! - [`build_prompt`] assembles the instruction text a remote language
//!   model would receive for a richer write-up,
//! - [`TemplateAgent`] renders a deterministic commentary offline from
//!   Handlebars templates, so the service answers even with no model
//!   configured.
//!
//! The engine has no dependency on this crate; explanation consumes the
//! report, never the other way around.

pub mod agent;
pub mod prompt;
pub mod templates;

pub use agent::{ExplanationAgent, TemplateAgent};
pub use prompt::build_prompt;
pub use templates::{Template, TemplatesFile, EXPLANATION_TEMPLATE};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("TEMPLATE/{0}")]
    Template(String),

    #[error("RENDER/{0}")]
    Render(String),

    #[error("IO/{0}")]
    Io(String),
}

/// Render commentary for a report, degrading failures into the answer text.
///
/// Mirrors the service contract: explanation never takes a request down.
pub fn explain_report(file_name: &str, report: &aduana_engine::ComplianceReport) -> String {
    match TemplateAgent::new().explain(file_name, report) {
        Ok(text) => text,
        Err(e) => format!("No fue posible generar la explicación: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aduana_engine::validate;
    use serde_json::json;

    #[test]
    fn test_explain_report_never_fails() {
        let report = validate(&json!({}));
        let answer = explain_report("factura.json", &report);
        assert!(answer.contains("factura.json"));
        assert!(answer.contains("No cumple"));
    }
}
