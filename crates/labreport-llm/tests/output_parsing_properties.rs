//! Property tests for enrichment-output parsing.

use labreport_llm::enrichment::{parse_enrichment_output, EnrichedReport, EnrichedResult};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parser_never_panics(raw in ".{0,400}") {
        // Arbitrary model output is an error at worst, never a panic
        let _ = parse_enrichment_output(&raw);
    }

    #[test]
    fn serialized_reports_round_trip(
        name in "[A-Za-z][A-Za-z ]{0,20}",
        value in -1.0e6..1.0e6,
        flagged in any::<bool>(),
    ) {
        let report = EnrichedReport {
            results: vec![EnrichedResult {
                test_name: name,
                value,
                unit: "mg/dL".to_string(),
                reference_range: Some("70-100".to_string()),
                status: if flagged { "High" } else { "Normal" }.to_string(),
            }],
            summary: Some("test".to_string()),
        };

        let json = serde_json::to_string(&report).unwrap();
        let back = parse_enrichment_output(&json).unwrap();
        prop_assert_eq!(back, report);
    }

    #[test]
    fn parser_tolerates_prose_wrapping(
        prefix in "[A-Za-z ,.!\n]{0,80}",
        suffix in "[A-Za-z ,.!\n]{0,80}",
    ) {
        let wrapped = format!(
            "{}{}{}",
            prefix,
            r#"{"results":[],"summary":"clean"}"#,
            suffix
        );

        let report = parse_enrichment_output(&wrapped).unwrap();
        prop_assert_eq!(report.summary.as_deref(), Some("clean"));
    }
}
