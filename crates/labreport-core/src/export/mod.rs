//! Presentation-layer export of report results.
//!
//! Thin adapter over the output contract: an ordered list of
//! `{test_name, value, unit, reference_range, status}` rows plus an optional
//! summary, rendered as JSON or CSV.

use serde::{Deserialize, Serialize};

use crate::models::{ExtractedTestResult, ReportResult};

/// A report snapshot prepared for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Export timestamp, RFC 3339
    pub exported_at: String,
    /// Result rows in report order
    pub results: Vec<ExtractedTestResult>,
    /// Narrative summary, when one was attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ReportExport {
    /// Snapshot a report for export.
    pub fn from_report(report: &ReportResult) -> Self {
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            results: report.results().to_vec(),
            summary: report.summary().map(str::to_string),
        }
    }

    /// Export to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("test_name,value,unit,reference_range,status\n");

        // Rows
        for result in &self.results {
            let range = result
                .reference_range
                .map(|r| r.to_string())
                .unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                escape_csv(&result.test_name),
                result.value,
                escape_csv(&result.unit),
                escape_csv(&range),
                result.status,
            ));
        }

        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
