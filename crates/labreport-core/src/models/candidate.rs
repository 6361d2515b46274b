//! Unvalidated extraction candidates.

use serde::{Deserialize, Serialize};

/// Where in the input text a candidate was found. Diagnostics only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceLocation {
    /// Byte offset of the match (pattern strategy)
    Offset(usize),
    /// Zero-based line number (line strategy)
    Line(usize),
}

/// A provisional `(name, value, unit, range)` extraction before normalization
/// and parsing. Produced by an extraction strategy, consumed once by the
/// aggregator, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    /// Name-like span as it appeared in the text
    pub raw_name: String,
    /// Numeric span as it appeared in the text
    pub raw_value: String,
    /// Unit span; empty when no unit was captured
    pub raw_unit: String,
    /// Range text, e.g. `"12.0-16.0"`, or a lone token for an ambiguous range
    pub raw_range: Option<String>,
    /// Position of the match in the input
    pub source: SourceLocation,
}
