//! Report processing pipeline.
//!
//! Pipeline: Candidate Extraction → Name Normalization → Value/Range Parsing
//! → Status Classification → Aggregation

mod aggregator;
mod classifier;
mod normalizer;
mod parser;

pub use aggregator::*;
pub use classifier::*;
pub use normalizer::*;
pub use parser::*;

use crate::extract::{ExtractionStrategy, LineExtractor, PatternExtractor};
use crate::models::{Candidate, ReportResult, Vocabulary};

/// The full extraction pipeline for one vocabulary.
///
/// Explicitly constructed and self-contained: the vocabulary and both
/// extraction strategies live here, not in process-wide state, so independent
/// pipelines can run side by side (one per report, per thread, per test).
pub struct ReportPipeline {
    vocabulary: Vocabulary,
    pattern: PatternExtractor,
    line: LineExtractor,
}

impl ReportPipeline {
    /// Create a pipeline over a validated vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        let line = LineExtractor::from_vocabulary(&vocabulary);
        Self {
            vocabulary,
            pattern: PatternExtractor::new(),
            line,
        }
    }

    /// Create a pipeline over the built-in standard panel.
    pub fn with_standard_panel() -> Self {
        Self::new(Vocabulary::standard_panel())
    }

    /// The vocabulary this pipeline resolves against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Process digitized document text (pattern strategy) into a report with
    /// a locally computed summary.
    pub fn process_document(&self, text: &str) -> ReportResult {
        self.process_with(&self.pattern, text)
    }

    /// Process OCR-derived text (line strategy) into a report with a locally
    /// computed summary.
    pub fn process_scan(&self, text: &str) -> ReportResult {
        self.process_with(&self.line, text)
    }

    /// Extract candidates from document text without aggregating.
    pub fn extract_document(&self, text: &str) -> Vec<Candidate> {
        self.pattern.extract(text)
    }

    /// Extract candidates from OCR text without aggregating.
    pub fn extract_scan(&self, text: &str) -> Vec<Candidate> {
        self.line.extract(text)
    }

    /// Aggregate candidates into a report without attaching a summary, for
    /// callers that delegate the narrative to an enrichment service.
    pub fn aggregate(&self, candidates: &[Candidate]) -> ReportResult {
        Aggregator::new(&self.vocabulary).aggregate(candidates)
    }

    fn process_with(&self, strategy: &dyn ExtractionStrategy, text: &str) -> ReportResult {
        // Step 1: scan the raw text into candidates
        let candidates = strategy.extract(text);

        // Step 2: normalize, parse, classify, merge
        let mut report = self.aggregate(&candidates);

        // Step 3: attach the local narrative; empty reports carry none
        if let Some(summary) = report.local_summary() {
            report.set_summary(summary);
        }

        report
    }
}
