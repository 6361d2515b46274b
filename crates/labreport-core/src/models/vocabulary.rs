//! Canonical test vocabulary.
//!
//! The vocabulary is an ordered list of canonical test definitions, loaded once
//! and read-only afterwards. Declaration order is a configuration contract:
//! name normalization scans entries in order and the first match wins, so more
//! specific labels (e.g. `MCHC`) must be declared before labels they contain
//! (`MCH`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::report::ReferenceRange;

/// Vocabulary configuration errors. Fatal, detected once at construction.
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("duplicate canonical test name: {0}")]
    DuplicateName(String),

    #[error("test {0} declares no accepted units")]
    NoUnits(String),

    #[error("test {0} has an unusable default range: {1}")]
    InvalidRange(String, ReferenceRange),

    #[error("vocabulary JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// A single canonical test definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestDefinition {
    /// Canonical test name; the unique key in report output
    pub name: String,
    /// Accepted units, most common first
    pub units: Vec<String>,
    /// Default reference interval, used when a report states none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ReferenceRange>,
}

impl TestDefinition {
    /// Create a definition with a single accepted unit and no default range.
    pub fn new(name: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            units: vec![unit.to_string()],
            range: None,
        }
    }

    /// Attach a default reference interval.
    pub fn with_range(mut self, low: f64, high: f64) -> Self {
        self.range = Some(ReferenceRange::new(low, high));
        self
    }

    /// The most common accepted unit.
    pub fn primary_unit(&self) -> &str {
        // units is non-empty once the definition is inside a Vocabulary
        self.units.first().map(String::as_str).unwrap_or_default()
    }
}

/// Ordered, validated registry of canonical test definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    entries: Vec<TestDefinition>,
}

impl Vocabulary {
    /// Build a vocabulary, validating the configuration.
    ///
    /// Rejects duplicate canonical names (case-insensitively — matching is
    /// case-insensitive, so such entries would be indistinguishable), empty
    /// unit lists, and unusable default ranges.
    pub fn new(entries: Vec<TestDefinition>) -> VocabularyResult<Self> {
        let mut seen: Vec<String> = Vec::with_capacity(entries.len());
        for def in &entries {
            let lower = def.name.to_lowercase();
            if seen.contains(&lower) {
                return Err(VocabularyError::DuplicateName(def.name.clone()));
            }
            seen.push(lower);

            if def.units.is_empty() {
                return Err(VocabularyError::NoUnits(def.name.clone()));
            }
            if let Some(range) = def.range {
                if !range.is_valid() {
                    return Err(VocabularyError::InvalidRange(def.name.clone(), range));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Load a vocabulary from a JSON array of definitions.
    pub fn from_json(json: &str) -> VocabularyResult<Self> {
        let entries: Vec<TestDefinition> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Definitions in declaration order.
    pub fn entries(&self) -> &[TestDefinition] {
        &self.entries
    }

    /// Exact (case-insensitive) lookup by canonical name.
    pub fn get(&self, name: &str) -> Option<&TestDefinition> {
        self.entries
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(name))
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Built-in panel: complete blood count plus basic chemistry.
    ///
    /// Ordering note: `MCHC` precedes `MCH` and the `RDW-*` variants precede
    /// nothing that contains them, keeping first-match resolution unambiguous.
    pub fn standard_panel() -> Self {
        let entries = vec![
            TestDefinition::new("Hemoglobin", "g/dL").with_range(12.0, 16.0),
            TestDefinition::new("RBC", "10^6/uL").with_range(4.2, 5.9),
            TestDefinition::new("HCT", "%").with_range(36.0, 46.0),
            TestDefinition::new("MCHC", "g/dL").with_range(32.0, 36.0),
            TestDefinition::new("MCH", "pg").with_range(27.0, 33.0),
            TestDefinition::new("MCV", "fL").with_range(80.0, 100.0),
            TestDefinition::new("RDW-CV", "%").with_range(11.5, 14.5),
            TestDefinition::new("RDW-SD", "fL").with_range(35.0, 47.0),
            TestDefinition::new("WBC", "10^3/uL").with_range(4.0, 11.0),
            TestDefinition::new("NEU%", "%").with_range(40.0, 70.0),
            TestDefinition::new("LYM#", "10^3/uL").with_range(1.0, 3.0),
            TestDefinition::new("LYM%", "%").with_range(20.0, 40.0),
            TestDefinition::new("MON%", "%").with_range(2.0, 8.0),
            TestDefinition::new("EOS%", "%").with_range(1.0, 4.0),
            TestDefinition::new("BAS%", "%").with_range(0.0, 1.0),
            TestDefinition::new("GRA#", "10^3/uL").with_range(2.0, 7.0),
            TestDefinition::new("PLT", "10^3/uL").with_range(150.0, 450.0),
            TestDefinition::new("Platelet Count", "10^3/uL").with_range(150.0, 450.0),
            TestDefinition::new("ESR", "mm/hr").with_range(0.0, 20.0),
            TestDefinition::new("Glucose", "mg/dL").with_range(70.0, 100.0),
            TestDefinition::new("Cholesterol", "mg/dL").with_range(125.0, 200.0),
            TestDefinition::new("Creatinine", "mg/dL").with_range(0.6, 1.2),
            TestDefinition::new("Urea", "mg/dL").with_range(7.0, 20.0),
            TestDefinition::new("Sodium", "mmol/L").with_range(135.0, 145.0),
            TestDefinition::new("Potassium", "mmol/L").with_range(3.5, 5.1),
        ];
        // The panel above is known-good; validation exists for caller-supplied
        // configurations.
        Self { entries }
    }
}
