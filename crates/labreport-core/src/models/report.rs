//! Report models: classified results and the ordered result set.

use serde::{Deserialize, Serialize};

/// Clinical reference interval. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferenceRange {
    /// Lower bound of the normal interval
    pub low: f64,
    /// Upper bound of the normal interval
    pub high: f64,
}

impl ReferenceRange {
    /// Create a reference interval.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// A usable interval has finite bounds and `low <= high`.
    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low <= self.high
    }
}

impl std::fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Classification of a value against its reference interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    /// Below the reference interval
    Low,
    /// Within the reference interval (bounds inclusive)
    Normal,
    /// Above the reference interval
    High,
    /// No usable reference interval
    Unknown,
}

impl Status {
    /// Whether this status flags a value outside its reference interval.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Status::Low | Status::High)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Status::Low => "Low",
            Status::Normal => "Normal",
            Status::High => "High",
            Status::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// A validated, classified lab-test result.
///
/// Serde field names are the output contract consumed by presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedTestResult {
    /// Canonical test name; always a name declared in the vocabulary
    pub test_name: String,
    /// Parsed numeric value
    pub value: f64,
    /// Unit, normalized lowercase
    pub unit: String,
    /// Reference interval the value was classified against
    pub reference_range: Option<ReferenceRange>,
    /// Classification of `value` against `reference_range`
    pub status: Status,
}

/// Final result set for one report.
///
/// Canonical names are unique; a later result for the same name replaces the
/// earlier one while keeping the name's first-seen position in iteration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportResult {
    results: Vec<ExtractedTestResult>,
    summary: Option<String>,
}

impl ReportResult {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, replacing any earlier entry for the same test name.
    pub fn insert(&mut self, result: ExtractedTestResult) {
        match self
            .results
            .iter()
            .position(|r| r.test_name == result.test_name)
        {
            Some(idx) => self.results[idx] = result,
            None => self.results.push(result),
        }
    }

    /// Results in first-seen order.
    pub fn results(&self) -> &[ExtractedTestResult] {
        &self.results
    }

    /// Look up a result by canonical test name.
    pub fn get(&self, test_name: &str) -> Option<&ExtractedTestResult> {
        self.results.iter().find(|r| r.test_name == test_name)
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Attach the narrative summary. Settable exactly once; returns `false`
    /// (leaving the existing summary in place) if one is already attached.
    pub fn set_summary(&mut self, summary: impl Into<String>) -> bool {
        if self.summary.is_some() {
            return false;
        }
        self.summary = Some(summary.into());
        true
    }

    /// The attached summary, if any.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Count of results flagged Low or High.
    pub fn out_of_range_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status.is_out_of_range())
            .count()
    }

    /// Narrative computed from the result statuses alone.
    pub fn local_summary(&self) -> Option<String> {
        if self.results.is_empty() {
            return None;
        }
        let flagged = self.out_of_range_count();
        let text = match flagged {
            0 => "All values within reference range".to_string(),
            1 => "1 value outside reference range".to_string(),
            n => format!("{} values outside reference range", n),
        };
        Some(text)
    }
}
