//! Rule results and their aggregation into a compliance report.

use serde::{Deserialize, Serialize};

use crate::status::{OverallStatus, RuleStatus};

/// Result of one checklist rule, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Stable rule identifier, 1-based.
    pub id: u32,
    /// Human-readable requirement label.
    pub name: String,
    pub status: RuleStatus,
    /// Explanation built from the same data that produced the status.
    pub message: String,
}

/// Machine-readable compliance report for one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub overall_status: OverallStatus,
    pub total: usize,
    pub ok: usize,
    pub partial: usize,
    pub error: usize,
    /// All rule results, ordered by id.
    pub rules: Vec<RuleResult>,
}

/// Reduce the rule results into counts and the overall verdict.
///
/// Strict worst-case precedence: any `ERROR` forces `No cumple`, any
/// `PARTIAL` without errors yields `Cumple parcialmente`, and only a clean
/// sheet reaches `Cumple`. Not a threshold computation.
pub fn aggregate(rules: Vec<RuleResult>) -> ComplianceReport {
    let total = rules.len();
    let ok = rules.iter().filter(|r| r.status == RuleStatus::Ok).count();
    let partial = rules.iter().filter(|r| r.status == RuleStatus::Partial).count();
    let error = rules.iter().filter(|r| r.status == RuleStatus::Error).count();

    let overall_status = if error > 0 {
        OverallStatus::NonCompliant
    } else if partial > 0 {
        OverallStatus::PartiallyCompliant
    } else {
        OverallStatus::Compliant
    };

    ComplianceReport {
        overall_status,
        total,
        ok,
        partial,
        error,
        rules,
    }
}

impl ComplianceReport {
    /// Whether every requirement is satisfied.
    pub fn is_compliant(&self) -> bool {
        self.overall_status == OverallStatus::Compliant
    }

    /// One-line summary naming the requirements that pulled the verdict down.
    pub fn summary(&self) -> String {
        match self.overall_status {
            OverallStatus::Compliant => "Todos los requisitos se cumplen.".to_string(),
            OverallStatus::PartiallyCompliant => {
                let partials: Vec<&str> = self
                    .rules
                    .iter()
                    .filter(|r| r.status == RuleStatus::Partial)
                    .map(|r| r.name.as_str())
                    .collect();
                format!("Cumple parcialmente: {}.", partials.join(", "))
            }
            OverallStatus::NonCompliant => {
                let errors: Vec<&str> = self
                    .rules
                    .iter()
                    .filter(|r| r.status == RuleStatus::Error)
                    .map(|r| r.name.as_str())
                    .collect();
                format!("No cumple: {}.", errors.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: u32, status: RuleStatus) -> RuleResult {
        RuleResult {
            id,
            name: format!("Requisito {}", id),
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_counts_always_add_up() {
        let report = aggregate(vec![
            result(1, RuleStatus::Ok),
            result(2, RuleStatus::Partial),
            result(3, RuleStatus::Error),
            result(4, RuleStatus::Ok),
        ]);
        assert_eq!(report.total, 4);
        assert_eq!(report.ok + report.partial + report.error, report.total);
    }

    #[test]
    fn test_single_error_forces_non_compliance() {
        let mut rules: Vec<RuleResult> = (1..=10).map(|id| result(id, RuleStatus::Ok)).collect();
        rules.push(result(11, RuleStatus::Error));
        let report = aggregate(rules);
        assert_eq!(report.overall_status, OverallStatus::NonCompliant);
        assert_eq!(report.ok, 10);
    }

    #[test]
    fn test_partial_without_errors_is_partial_compliance() {
        let report = aggregate(vec![
            result(1, RuleStatus::Ok),
            result(2, RuleStatus::Partial),
        ]);
        assert_eq!(report.overall_status, OverallStatus::PartiallyCompliant);
        assert!(!report.is_compliant());
    }

    #[test]
    fn test_clean_sheet_is_compliant() {
        let report = aggregate(vec![result(1, RuleStatus::Ok)]);
        assert_eq!(report.overall_status, OverallStatus::Compliant);
        assert!(report.is_compliant());
    }

    #[test]
    fn test_summary_names_the_offenders() {
        let report = aggregate(vec![
            result(1, RuleStatus::Ok),
            result(2, RuleStatus::Error),
        ]);
        assert!(report.summary().contains("Requisito 2"));
        assert!(!report.summary().contains("Requisito 1"));
    }

    #[test]
    fn test_report_wire_shape() {
        let report = aggregate(vec![result(1, RuleStatus::Ok)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["overallStatus"], "Cumple");
        assert_eq!(json["total"], 1);
        assert_eq!(json["rules"][0]["status"], "OK");
    }
}
