//! Line-oriented extractor for noisy OCR-derived text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Candidate, SourceLocation, Vocabulary};

use super::ExtractionStrategy;

// Plain digit/decimal-point scan; OCR output is too noisy for a structural
// pattern.
static NUMBER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d*\.?\d+").expect("number token pattern is valid"));

/// Line-oriented candidate extractor.
///
/// A line is eligible when any known label occurs in it as a case-insensitive
/// substring. All numeric tokens on an eligible line are collected: the first
/// is the value, the second and third (when present) form a `low-high` range,
/// and a lone second token is kept as an opaque range marker for the parser to
/// flag as incomplete. Every matching label yields its own candidate;
/// de-duplication is the aggregator's job.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    /// (display label, lowercased label), in declaration order
    labels: Vec<(String, String)>,
}

impl LineExtractor {
    /// Create an extractor for the given labels.
    pub fn new(labels: Vec<String>) -> Self {
        let labels = labels
            .into_iter()
            .map(|label| {
                let lower = label.to_lowercase();
                (label, lower)
            })
            .collect();
        Self { labels }
    }

    /// Create an extractor recognizing the vocabulary's canonical names.
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self::new(
            vocabulary
                .entries()
                .iter()
                .map(|def| def.name.clone())
                .collect(),
        )
    }
}

impl ExtractionStrategy for LineExtractor {
    fn extract(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_lower = line.to_lowercase();
            // Tokenized once per line, shared by all matching labels
            let mut numbers: Option<Vec<String>> = None;

            for (label, label_lower) in &self.labels {
                if !line_lower.contains(label_lower.as_str()) {
                    continue;
                }
                let numbers = numbers.get_or_insert_with(|| {
                    NUMBER_TOKEN
                        .find_iter(line)
                        .map(|m| m.as_str().to_string())
                        .collect()
                });
                let Some(value) = numbers.first() else {
                    continue;
                };

                let raw_range = match numbers.len() {
                    0 | 1 => None,
                    2 => Some(numbers[1].clone()),
                    _ => Some(format!("{}-{}", numbers[1], numbers[2])),
                };

                candidates.push(Candidate {
                    raw_name: label.clone(),
                    raw_value: value.clone(),
                    raw_unit: String::new(),
                    raw_range,
                    source: SourceLocation::Line(line_no),
                });
            }
        }

        log::debug!("line scan produced {} candidates", candidates.len());
        candidates
    }
}
