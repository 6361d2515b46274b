//! Parsing of enrichment-service output.
//!
//! The enrichment service is an opaque collaborator; this module owns its
//! edges. Wire types here deliberately mirror, but do not depend on, the core
//! crate's output contract — the two crates stay decoupled.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Enrichment errors.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Enrichment service error: {0}")]
    Service(String),
}

pub type EnrichmentResult<T> = Result<T, EnrichmentError>;

/// Structured report as returned by the enrichment service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedReport {
    pub results: Vec<EnrichedResult>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// A single enriched test result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedResult {
    pub test_name: String,
    pub value: f64,
    pub unit: String,
    /// Interval as `"low-high"` text; the model may omit it
    #[serde(default)]
    pub reference_range: Option<String>,
    pub status: String,
}

impl EnrichedResult {
    /// Whether the model flagged this value outside its reference range.
    pub fn is_flagged(&self) -> bool {
        matches!(self.status.as_str(), "Low" | "High")
    }
}

/// Parse model output into a structured report.
///
/// Models wrap their JSON in prose more often than not; the object is located
/// by brace scanning before deserialization.
pub fn parse_enrichment_output(raw: &str) -> EnrichmentResult<EnrichedReport> {
    let start = raw
        .find('{')
        .ok_or_else(|| EnrichmentError::InvalidFormat("no JSON object found in response".into()))?;
    let end = raw
        .rfind('}')
        .ok_or_else(|| EnrichmentError::InvalidFormat("no closing brace found in response".into()))?;
    if end < start {
        return Err(EnrichmentError::InvalidFormat(
            "braces out of order in response".into(),
        ));
    }

    let report: EnrichedReport = serde_json::from_str(&raw[start..=end])?;
    Ok(report)
}

/// Mock enricher for testing without a model behind it.
pub struct MockEnricher;

impl MockEnricher {
    /// Produce an enriched report with a deterministic summary computed from
    /// the statuses alone.
    pub fn enrich(results: Vec<EnrichedResult>) -> EnrichedReport {
        let summary = Self::summarize(&results);
        EnrichedReport {
            results,
            summary: Some(summary),
        }
    }

    /// Deterministic narrative over a set of results.
    pub fn summarize(results: &[EnrichedResult]) -> String {
        let flagged: Vec<String> = results
            .iter()
            .filter(|r| r.is_flagged())
            .map(|r| format!("{} ({})", r.test_name, r.status))
            .collect();

        if results.is_empty() {
            "No test results extracted".to_string()
        } else if flagged.is_empty() {
            "All values within reference range".to_string()
        } else {
            format!(
                "{} of {} values outside reference range: {}",
                flagged.len(),
                results.len(),
                flagged.join(", ")
            )
        }
    }
}
