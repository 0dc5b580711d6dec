//! Explanation agents.
//!
//! [`ExplanationAgent`] is the seam where a remote language model would plug
//! in. [`TemplateAgent`] is the deterministic, offline implementation: it
//! renders the commentary from Handlebars templates, with all report data
//! precomputed into plain JSON so templates stay simple.

use aduana_engine::{ComplianceReport, RuleStatus};
use handlebars::Handlebars;
use serde_json::json;

use crate::templates::{TemplatesFile, EXPLANATION_TEMPLATE};
use crate::ExplainError;

/// Generates free-text commentary for a produced report.
pub trait ExplanationAgent: Send + Sync {
    fn explain(&self, file_name: &str, report: &ComplianceReport)
        -> Result<String, ExplainError>;
}

/// Offline agent rendering commentary from templates.
pub struct TemplateAgent {
    handlebars: Handlebars<'static>,
}

impl TemplateAgent {
    /// Agent rendering the built-in template.
    pub fn new() -> Self {
        Self::with_templates(TemplatesFile::builtin())
    }

    /// Agent rendering a loaded template set.
    pub fn with_templates(templates: TemplatesFile) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);

        for (name, template) in &templates.templates {
            let _ = handlebars.register_template_string(name, &template.template);
        }

        Self { handlebars }
    }
}

impl Default for TemplateAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplanationAgent for TemplateAgent {
    fn explain(
        &self,
        file_name: &str,
        report: &ComplianceReport,
    ) -> Result<String, ExplainError> {
        let errors: Vec<_> = report
            .rules
            .iter()
            .filter(|r| r.status == RuleStatus::Error)
            .map(|r| json!({"name": r.name, "message": r.message}))
            .collect();
        let partials: Vec<_> = report
            .rules
            .iter()
            .filter(|r| r.status == RuleStatus::Partial)
            .map(|r| json!({"name": r.name, "message": r.message}))
            .collect();
        let partial_names = report
            .rules
            .iter()
            .filter(|r| r.status == RuleStatus::Partial)
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let data = json!({
            "file_name": file_name,
            "overall_status": report.overall_status,
            "summary": report.summary(),
            "total": report.total,
            "ok": report.ok,
            "partial": report.partial,
            "error": report.error,
            "errors": errors,
            "partials": partials,
            "partial_names": partial_names,
        });

        self.handlebars
            .render(EXPLANATION_TEMPLATE, &data)
            .map_err(|e| ExplainError::Render(e.to_string()))
    }
}
