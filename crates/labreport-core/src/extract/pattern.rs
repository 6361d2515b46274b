//! Regex tokenizing extractor for digitized document text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Candidate, SourceLocation};

use super::ExtractionStrategy;

/// Name-like spans this short are too ambiguous to keep.
const MIN_NAME_LEN: usize = 3;

// Compiled once, used for every scan. Captures: name span, numeric span,
// optional unit span, optional (possibly parenthesized) low-high range.
static CANDIDATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ([\w\ ()\-]+?)                                  # name-like span
        \s*[:\-]?\s*                                    # optional separator
        (\d[\d.,]*)                                     # numeric value span
        [\ \t]*
        ([A-Za-zµμ%][A-Za-z0-9µμ%/\^]*)?                # optional unit span
        (?:[\ \t]*\(?[\ \t]*
            (\d[\d.,]*[\ \t]*-[\ \t]*\d[\d.,]*)         # optional low-high range
        [\ \t]*\)?)?
        ",
    )
    .expect("candidate pattern is valid")
});

/// Tokenizing candidate extractor.
///
/// Matches a name-like span (word characters, spaces, parentheses, hyphens),
/// an optional `:` or `-` separator, a numeric span, an optional unit span,
/// and an optional trailing or parenthesized reference range. Spans with no
/// number never match; name spans of one or two characters are dropped.
#[derive(Debug, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    /// Create the extractor.
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionStrategy for PatternExtractor {
    fn extract(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for caps in CANDIDATE_PATTERN.captures_iter(text) {
            let name = caps[1].trim();
            if name.len() < MIN_NAME_LEN {
                continue;
            }
            let whole = caps.get(0).map(|m| m.start()).unwrap_or_default();

            candidates.push(Candidate {
                raw_name: name.to_string(),
                raw_value: caps[2].to_string(),
                raw_unit: caps.get(3).map(|m| m.as_str()).unwrap_or("").to_string(),
                raw_range: caps.get(4).map(|m| m.as_str().to_string()),
                source: SourceLocation::Offset(whole),
            });
        }

        log::debug!("pattern scan produced {} candidates", candidates.len());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Candidate> {
        PatternExtractor::new().extract(text)
    }

    #[test]
    fn test_name_value_unit_and_parenthesized_range() {
        let candidates = extract("Hemoglobin: 13.5 g/dL (12.0-16.0)");

        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.raw_name, "Hemoglobin");
        assert_eq!(c.raw_value, "13.5");
        assert_eq!(c.raw_unit, "g/dL");
        assert_eq!(c.raw_range.as_deref(), Some("12.0-16.0"));
        assert_eq!(c.source, SourceLocation::Offset(0));
    }

    #[test]
    fn test_bare_range_without_parentheses() {
        let candidates = extract("Glucose 250 mg/dL 70-100");

        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.raw_name, "Glucose");
        assert_eq!(c.raw_value, "250");
        assert_eq!(c.raw_unit, "mg/dL");
        assert_eq!(c.raw_range.as_deref(), Some("70-100"));
    }

    #[test]
    fn test_missing_unit_and_range() {
        let candidates = extract("Creatinine - 0.9");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].raw_name, "Creatinine");
        assert_eq!(candidates[0].raw_value, "0.9");
        assert_eq!(candidates[0].raw_unit, "");
        assert_eq!(candidates[0].raw_range, None);
    }

    #[test]
    fn test_short_name_dropped() {
        // "Na" is two characters, too ambiguous
        assert!(extract("Na 140 mmol/L").is_empty());
    }

    #[test]
    fn test_text_without_numbers_yields_nothing() {
        assert!(extract("Patient fasting, sample slightly hemolyzed").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_multiple_lines() {
        let text = "Hemoglobin: 13.5 g/dL (12.0-16.0)\nCreatinine: 0.9 mg/dL (0.6-1.2)";
        let candidates = extract(text);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].raw_name, "Hemoglobin");
        assert_eq!(candidates[1].raw_name, "Creatinine");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Glucose 250 mg/dL 70-100";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_name_with_parentheses() {
        let candidates = extract("Mean Cell Hb Conc (MCHC): 33.1 g/dL");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].raw_name, "Mean Cell Hb Conc (MCHC)");
        assert_eq!(candidates[0].raw_value, "33.1");
    }

    #[test]
    fn test_decimal_comma_value_span() {
        let candidates = extract("Hemoglobin: 13,5 g/dL");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].raw_value, "13,5");
    }
}
