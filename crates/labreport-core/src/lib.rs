//! Labreport Core Library
//!
//! Turns unstructured clinical report text into a structured, classified set
//! of lab-test results.
//!
//! # Architecture
//!
//! ```text
//! PDF text / OCR text
//!         │
//!         ▼
//! Candidate Extractor ──── pattern strategy (digitized documents)
//!         │          └──── line strategy (noisy scans)
//!         ▼
//! Name Normalizer ──── ordered vocabulary scan, first match wins
//!         │
//!         ▼
//! Value/Range Parser ── tagged outcomes, no exception control flow
//!         │
//!         ▼
//! Status Classifier ─── Low / Normal / High / Unknown, inclusive bounds
//!         │
//!         ▼
//! Result Aggregator ─── last-write-wins per test, first-seen order
//!         │
//!         ▼
//!    ReportResult ───── JSON / CSV export, optional narrative summary
//! ```
//!
//! # Core Principle
//!
//! Best-effort extraction: per-candidate problems filter or degrade, they
//! never abort. Only vocabulary misconfiguration is an error, and it surfaces
//! at construction time, before any report is processed.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Vocabulary, Candidate, ReportResult, etc.)
//! - [`extract`]: Candidate extraction strategies over raw text
//! - [`pipeline`]: Normalization, parsing, classification, aggregation
//! - [`export`]: JSON/CSV presentation adapter

pub mod export;
pub mod extract;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use export::ReportExport;
pub use extract::{ExtractionStrategy, LineExtractor, PatternExtractor};
pub use models::{
    Candidate, ExtractedTestResult, ReferenceRange, ReportResult, SourceLocation, Status,
    TestDefinition, Vocabulary, VocabularyError,
};
pub use pipeline::{
    classify, parse_range, parse_unit, parse_value, Aggregator, NameNormalizer, ParseError,
    RangeOutcome, ReportPipeline, UNIT_NOT_AVAILABLE,
};
