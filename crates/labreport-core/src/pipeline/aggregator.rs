//! Candidate aggregation into the final result set.

use crate::models::{Candidate, ExtractedTestResult, ReportResult, Vocabulary};

use super::classifier::classify;
use super::normalizer::NameNormalizer;
use super::parser::{parse_range, parse_unit, parse_value, RangeOutcome, UNIT_NOT_AVAILABLE};

/// Merges extraction candidates into an ordered, de-duplicated report.
///
/// Candidates are consumed in extractor order. Ones that fail normalization or
/// value parsing are dropped silently; that is filtering, not failure, and a
/// partially-populated report always beats an aborted pipeline. A later valid
/// candidate for a canonical name replaces the earlier entry while keeping the
/// name's first-seen position.
pub struct Aggregator<'a> {
    normalizer: NameNormalizer<'a>,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator over the vocabulary.
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            normalizer: NameNormalizer::new(vocabulary),
        }
    }

    /// Aggregate candidates into a report. No summary is attached; callers
    /// compute one locally or delegate to an enrichment service.
    pub fn aggregate(&self, candidates: &[Candidate]) -> ReportResult {
        let mut report = ReportResult::new();

        for candidate in candidates {
            let Some(definition) = self.normalizer.normalize(&candidate.raw_name) else {
                log::debug!("no vocabulary match for {:?}", candidate.raw_name);
                continue;
            };

            let value = match parse_value(&candidate.raw_value) {
                Ok(value) => value,
                Err(err) => {
                    log::debug!("dropping {}: {}", definition.name, err);
                    continue;
                }
            };

            let mut unit = parse_unit(&candidate.raw_unit);
            if unit == UNIT_NOT_AVAILABLE {
                unit = definition.primary_unit().to_lowercase();
            }

            // A range stated by the report wins over the vocabulary default,
            // even when inverted; Incomplete and Unusable both mean "nothing
            // usable was stated".
            let stated = candidate
                .raw_range
                .as_deref()
                .map(parse_range)
                .unwrap_or(RangeOutcome::Unusable);
            let reference_range = match stated {
                RangeOutcome::Interval(range) => Some(range),
                RangeOutcome::Incomplete(_) | RangeOutcome::Unusable => definition.range,
            };

            report.insert(ExtractedTestResult {
                test_name: definition.name.clone(),
                value,
                unit,
                reference_range,
                status: classify(value, reference_range.as_ref()),
            });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReferenceRange, SourceLocation, Status, TestDefinition};

    fn candidate(name: &str, value: &str, unit: &str, range: Option<&str>) -> Candidate {
        Candidate {
            raw_name: name.to_string(),
            raw_value: value.to_string(),
            raw_unit: unit.to_string(),
            raw_range: range.map(str::to_string),
            source: SourceLocation::Offset(0),
        }
    }

    fn aggregate(candidates: &[Candidate]) -> ReportResult {
        let vocab = Vocabulary::standard_panel();
        Aggregator::new(&vocab).aggregate(candidates)
    }

    #[test]
    fn test_valid_candidate_becomes_result() {
        let report = aggregate(&[candidate(
            "Hemoglobin",
            "13.5",
            "g/dL",
            Some("12.0-16.0"),
        )]);

        assert_eq!(report.len(), 1);
        let result = report.get("Hemoglobin").unwrap();
        assert_eq!(result.value, 13.5);
        assert_eq!(result.unit, "g/dl");
        assert_eq!(result.reference_range, Some(ReferenceRange::new(12.0, 16.0)));
        assert_eq!(result.status, Status::Normal);
    }

    #[test]
    fn test_unmatched_name_dropped() {
        let report = aggregate(&[candidate("Patient Age", "54", "", None)]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_unparseable_value_dropped() {
        let report = aggregate(&[candidate("Hemoglobin", "--", "g/dL", None)]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_vocabulary_default_range_fallback() {
        // No range stated; the panel default (70-100) classifies 250 as High
        let report = aggregate(&[candidate("Glucose", "250", "mg/dL", None)]);

        let result = report.get("Glucose").unwrap();
        assert_eq!(result.reference_range, Some(ReferenceRange::new(70.0, 100.0)));
        assert_eq!(result.status, Status::High);
    }

    #[test]
    fn test_incomplete_range_marker_falls_back() {
        let report = aggregate(&[candidate("Glucose", "85", "mg/dL", Some("100"))]);

        let result = report.get("Glucose").unwrap();
        assert_eq!(result.reference_range, Some(ReferenceRange::new(70.0, 100.0)));
        assert_eq!(result.status, Status::Normal);
    }

    #[test]
    fn test_stated_range_wins_over_default() {
        // Stated 50-90 overrides the panel's 70-100
        let report = aggregate(&[candidate("Glucose", "95", "mg/dL", Some("50-90"))]);

        let result = report.get("Glucose").unwrap();
        assert_eq!(result.reference_range, Some(ReferenceRange::new(50.0, 90.0)));
        assert_eq!(result.status, Status::High);
    }

    #[test]
    fn test_inverted_stated_range_is_unknown() {
        let report = aggregate(&[candidate("Glucose", "85", "mg/dL", Some("100-70"))]);

        let result = report.get("Glucose").unwrap();
        assert_eq!(result.reference_range, Some(ReferenceRange::new(100.0, 70.0)));
        assert_eq!(result.status, Status::Unknown);
    }

    #[test]
    fn test_missing_unit_uses_vocabulary_unit() {
        let report = aggregate(&[candidate("Hemoglobin", "13.5", "", None)]);
        assert_eq!(report.get("Hemoglobin").unwrap().unit, "g/dl");
    }

    #[test]
    fn test_no_default_range_is_unknown() {
        let vocab = Vocabulary::new(vec![TestDefinition::new("Ferritin", "ng/mL")]).unwrap();
        let report = Aggregator::new(&vocab).aggregate(&[candidate("Ferritin", "85", "", None)]);

        let result = report.get("Ferritin").unwrap();
        assert_eq!(result.reference_range, None);
        assert_eq!(result.status, Status::Unknown);
        assert_eq!(result.unit, "ng/ml");
    }

    #[test]
    fn test_last_write_wins_first_seen_order() {
        let report = aggregate(&[
            candidate("Hemoglobin", "10", "g/dL", None),
            candidate("WBC", "5", "", None),
            candidate("Hemoglobin", "12", "g/dL", None),
        ]);

        assert_eq!(report.len(), 2);
        assert_eq!(report.results()[0].test_name, "Hemoglobin");
        assert_eq!(report.results()[1].test_name, "WBC");
        assert_eq!(report.results()[0].value, 12.0);
    }

    #[test]
    fn test_invalid_later_duplicate_keeps_earlier_entry() {
        let report = aggregate(&[
            candidate("Hemoglobin", "13.5", "g/dL", None),
            candidate("Hemoglobin", "smudge", "g/dL", None),
        ]);

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("Hemoglobin").unwrap().value, 13.5);
    }

    #[test]
    fn test_empty_input() {
        let report = aggregate(&[]);
        assert!(report.is_empty());
        assert_eq!(report.summary(), None);
    }
}
