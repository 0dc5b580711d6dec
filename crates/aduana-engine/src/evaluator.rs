//! Uniform evaluation of the checklist table.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::catalog::{Check, ChecklistRule, CHECKLIST};
use crate::document::NormalizedInvoice;
use crate::report::RuleResult;
use crate::status::RuleStatus;

/// Size of the fixed rule set. `evaluate` returns exactly this many results
/// for any input, in ascending id order.
pub const RULE_COUNT: usize = 11;

/// Apply the full checklist to a normalized invoice.
///
/// Missing data is never a fault here; absence classifies as `ERROR` or
/// `PARTIAL` on the affected rule. A rule that fails to evaluate at all is
/// contained: it reports `ERROR` with a diagnostic message and the remaining
/// rules still run.
pub fn evaluate(invoice: &NormalizedInvoice) -> Vec<RuleResult> {
    CHECKLIST
        .iter()
        .map(|rule| {
            catch_unwind(AssertUnwindSafe(|| apply(rule, invoice))).unwrap_or_else(|_| {
                tracing::warn!(rule = rule.id, "checklist rule failed to evaluate");
                RuleResult {
                    id: rule.id,
                    name: rule.name.to_string(),
                    status: RuleStatus::Error,
                    message: format!("No se pudo evaluar el requisito \"{}\".", rule.name),
                }
            })
        })
        .collect()
}

fn apply(rule: &ChecklistRule, invoice: &NormalizedInvoice) -> RuleResult {
    let (status, message) = match &rule.check {
        Check::Single { signal, found, missing } => match signal.resolve(invoice) {
            Some(value) => (RuleStatus::Ok, found(&value)),
            None => (RuleStatus::Error, (*missing).to_string()),
        },
        Check::Dual { first, second, found, missing } => {
            let a = first.resolve(invoice);
            let b = second.resolve(invoice);
            match (&a, &b) {
                (Some(_), Some(_)) => (RuleStatus::Ok, found(a.as_deref(), b.as_deref())),
                (None, None) => (RuleStatus::Error, (*missing).to_string()),
                _ => (RuleStatus::Partial, found(a.as_deref(), b.as_deref())),
            }
        }
        Check::FirstOf { signals, found, missing } => {
            match signals.iter().find_map(|signal| signal.resolve(invoice)) {
                Some(value) => (RuleStatus::Ok, found(&value)),
                None => (RuleStatus::Error, (*missing).to_string()),
            }
        }
    };

    tracing::debug!(rule = rule.id, status = %status, "checklist rule evaluated");

    RuleResult {
        id: rule.id,
        name: rule.name.to_string(),
        status,
        message,
    }
}
