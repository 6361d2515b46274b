//! Value, unit, and reference-range parsing.
//!
//! Parsing never drives control flow through panics or exceptions: values
//! return an explicit error, ranges return a tagged outcome the classifier can
//! match on.

use thiserror::Error;

use crate::models::ReferenceRange;

/// Sentinel unit for candidates that carried no unit text. Distinguishes
/// "units never captured" from "units present but stripped to empty".
pub const UNIT_NOT_AVAILABLE: &str = "n/a";

/// Numeric parse errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty value text")]
    Empty,

    #[error("not a numeric value: {0}")]
    NotNumeric(String),
}

/// Parse a numeric value span.
///
/// Trims whitespace and accepts a decimal comma in place of a decimal point.
/// Text without at least one digit fails.
pub fn parse_value(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let cleaned = trimmed.replace(',', ".");
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParseError::NotNumeric(trimmed.to_string()));
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| ParseError::NotNumeric(trimmed.to_string()))
}

/// Normalize a unit span: trimmed and lowercased; empty becomes the
/// [`UNIT_NOT_AVAILABLE`] sentinel.
pub fn parse_unit(text: &str) -> String {
    let unit = text.trim().to_lowercase();
    if unit.is_empty() {
        UNIT_NOT_AVAILABLE.to_string()
    } else {
        unit
    }
}

/// Outcome of parsing reference-range text.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeOutcome {
    /// Both endpoints parsed from `low-high` text
    Interval(ReferenceRange),
    /// A single numeric token where an interval was expected; equivalent to
    /// "no usable range" for classification
    Incomplete(f64),
    /// Empty or non-numeric range text
    Unusable,
}

impl RangeOutcome {
    /// The parsed interval, when one exists.
    pub fn interval(&self) -> Option<ReferenceRange> {
        match self {
            RangeOutcome::Interval(range) => Some(*range),
            RangeOutcome::Incomplete(_) | RangeOutcome::Unusable => None,
        }
    }
}

/// Parse reference-range text of the form `"low-high"`.
///
/// A lone numeric token is reported as [`RangeOutcome::Incomplete`] rather
/// than fabricating an interval; anything else unparseable is
/// [`RangeOutcome::Unusable`].
pub fn parse_range(text: &str) -> RangeOutcome {
    let parts: Vec<&str> = text.trim().split('-').map(str::trim).collect();

    match parts.as_slice() {
        [single] => match parse_value(single) {
            Ok(value) => RangeOutcome::Incomplete(value),
            Err(_) => RangeOutcome::Unusable,
        },
        [low, high] => match (parse_value(low), parse_value(high)) {
            (Ok(low), Ok(high)) => RangeOutcome::Interval(ReferenceRange::new(low, high)),
            _ => RangeOutcome::Unusable,
        },
        _ => RangeOutcome::Unusable,
    }
}
