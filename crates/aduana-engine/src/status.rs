//! Tri-state rule status and the overall compliance verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single checklist rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleStatus {
    /// Every signal the rule needs is present.
    Ok,
    /// Exactly one of two related signals is present.
    Partial,
    /// The rule's data is missing entirely.
    Error,
}

/// Compliance classification for the whole document.
///
/// Derived by worst-case precedence over all rule statuses: a single
/// `ERROR` forces `No cumple` regardless of how many rules passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "Cumple")]
    Compliant,
    #[serde(rename = "Cumple parcialmente")]
    PartiallyCompliant,
    #[serde(rename = "No cumple")]
    NonCompliant,
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuleStatus::Ok => write!(f, "OK"),
            RuleStatus::Partial => write!(f, "PARTIAL"),
            RuleStatus::Error => write!(f, "ERROR"),
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OverallStatus::Compliant => write!(f, "Cumple"),
            OverallStatus::PartiallyCompliant => write!(f, "Cumple parcialmente"),
            OverallStatus::NonCompliant => write!(f, "No cumple"),
        }
    }
}
