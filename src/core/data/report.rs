use serde::Serialize;

/// Reconciliation result for one locale file against its base file.
///
/// Field order is the serialized order in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleReport {
    pub project: String,
    /// Name of the folder holding the locale file (e.g. `values-es`).
    pub locale: String,
    pub path: String,
    pub base_path: String,
    pub missing_count: usize,
    pub extra_count: usize,
    pub type_mismatch_count: usize,
    pub duplicate_count: usize,
    pub missing_keys: Vec<String>,
    pub extra_keys: Vec<String>,
    pub type_mismatch_keys: Vec<String>,
    pub duplicate_keys: Vec<String>,
}

/// All locale reports of a run plus the running missing total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub total_missing: usize,
    pub locales: Vec<LocaleReport>,
}

impl AuditReport {
    pub fn push(&mut self, report: LocaleReport) {
        self.total_missing += report.missing_count;
        self.locales.push(report);
    }
}
