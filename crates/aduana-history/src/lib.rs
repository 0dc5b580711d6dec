//! Validation history for the invoice compliance service.
//!
//! Records one entry per validation call (file name, timestamp, verdict,
//! counts) so operators can review past uploads. The log is bounded and
//! in-memory; durable storage belongs to the deployment, not to this crate,
//! and the engine itself never touches it.

use aduana_engine::{ComplianceReport, OverallStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry ID.
    pub id: String,

    /// Name of the uploaded file the invoice came from.
    pub file_name: String,

    /// When the validation ran.
    pub uploaded_at: DateTime<Utc>,

    /// Overall verdict of the report.
    pub status: OverallStatus,

    /// Rule counts, copied from the report.
    pub total: usize,
    pub ok_count: usize,
    pub partial_count: usize,
    pub error_count: usize,
}

impl HistoryEntry {
    /// Build an entry from a produced report.
    pub fn from_report(file_name: impl Into<String>, report: &ComplianceReport) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: file_name.into(),
            uploaded_at: Utc::now(),
            status: report.overall_status,
            total: report.total,
            ok_count: report.ok,
            partial_count: report.partial,
            error_count: report.error,
        }
    }
}

/// Bounded, in-memory validation log.
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl HistoryLog {
    /// Create a new history log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: 10000,
        }
    }

    /// Create with a custom max size.
    pub fn with_max_entries(max: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max,
        }
    }

    /// Append an entry, trimming the oldest ones past the limit.
    pub fn log(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);

        if self.entries.len() > self.max_entries {
            let drain_count = self.entries.len() - self.max_entries;
            self.entries.drain(0..drain_count);
        }
    }

    /// Record a validation call; returns the entry ID.
    pub fn record(&mut self, file_name: impl Into<String>, report: &ComplianceReport) -> String {
        let entry = HistoryEntry::from_report(file_name, report);
        let id = entry.id.clone();
        self.log(entry);
        id
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries newest first, the order the history listing shows them.
    pub fn recent_first(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().collect()
    }

    /// Entries for a specific file name.
    pub fn entries_for_file(&self, file_name: &str) -> Vec<&HistoryEntry> {
        self.entries.iter().filter(|e| e.file_name == file_name).collect()
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Get statistics over the recorded verdicts.
    pub fn stats(&self) -> HistoryStats {
        let total_validations = self.entries.len();
        let compliant = self
            .entries
            .iter()
            .filter(|e| e.status == OverallStatus::Compliant)
            .count();
        let partially_compliant = self
            .entries
            .iter()
            .filter(|e| e.status == OverallStatus::PartiallyCompliant)
            .count();
        let non_compliant = self
            .entries
            .iter()
            .filter(|e| e.status == OverallStatus::NonCompliant)
            .count();

        HistoryStats {
            total_validations,
            compliant,
            partially_compliant,
            non_compliant,
            non_compliance_rate: if total_validations > 0 {
                non_compliant as f64 / total_validations as f64
            } else {
                0.0
            },
        }
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about recorded validations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_validations: usize,
    pub compliant: usize,
    pub partially_compliant: usize,
    pub non_compliant: usize,
    pub non_compliance_rate: f64,
}
