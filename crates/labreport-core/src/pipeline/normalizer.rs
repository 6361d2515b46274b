//! Candidate name normalization against the vocabulary.

use crate::models::{TestDefinition, Vocabulary};

/// Resolves raw name spans to canonical vocabulary entries.
///
/// Matching is case-insensitive substring containment, scanned in vocabulary
/// declaration order: the first canonical name contained in the candidate's
/// trimmed, lowercased raw name wins. The match is intentionally permissive
/// ("Hemoglobin Level" resolves to "Hemoglobin"); declaration order decides
/// between canonical names that both match, which makes vocabulary order a
/// configuration contract rather than an accident.
pub struct NameNormalizer<'a> {
    vocabulary: &'a Vocabulary,
    /// Lowercased canonical names, same order as the vocabulary
    lowered: Vec<String>,
}

impl<'a> NameNormalizer<'a> {
    /// Create a normalizer over the vocabulary.
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        let lowered = vocabulary
            .entries()
            .iter()
            .map(|def| def.name.to_lowercase())
            .collect();
        Self { vocabulary, lowered }
    }

    /// Resolve a raw name span to its canonical definition.
    ///
    /// `None` is the expected outcome for non-medical noise text and means the
    /// candidate should be discarded, not that an error occurred.
    pub fn normalize(&self, raw_name: &str) -> Option<&'a TestDefinition> {
        let haystack = raw_name.trim().to_lowercase();
        if haystack.is_empty() {
            return None;
        }
        self.lowered
            .iter()
            .position(|canonical| haystack.contains(canonical.as_str()))
            .map(|idx| &self.vocabulary.entries()[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Vocabulary {
        Vocabulary::standard_panel()
    }

    #[test]
    fn test_exact_name_resolves() {
        let vocab = panel();
        let normalizer = NameNormalizer::new(&vocab);

        assert_eq!(normalizer.normalize("Hemoglobin").unwrap().name, "Hemoglobin");
        assert_eq!(normalizer.normalize("glucose").unwrap().name, "Glucose");
    }

    #[test]
    fn test_permissive_containment() {
        let vocab = panel();
        let normalizer = NameNormalizer::new(&vocab);

        assert_eq!(
            normalizer.normalize("Hemoglobin Level").unwrap().name,
            "Hemoglobin"
        );
        assert_eq!(
            normalizer.normalize("  Serum Glucose (fasting) ").unwrap().name,
            "Glucose"
        );
    }

    #[test]
    fn test_declaration_order_decides() {
        let vocab = panel();
        let normalizer = NameNormalizer::new(&vocab);

        // "MCHC" contains both "MCHC" and "MCH"; the earlier entry wins
        assert_eq!(normalizer.normalize("MCHC").unwrap().name, "MCHC");
        assert_eq!(normalizer.normalize("MCH").unwrap().name, "MCH");
    }

    #[test]
    fn test_noise_is_filtered() {
        let vocab = panel();
        let normalizer = NameNormalizer::new(&vocab);

        assert!(normalizer.normalize("Patient Name").is_none());
        assert!(normalizer.normalize("Reference").is_none());
        assert!(normalizer.normalize("").is_none());
        assert!(normalizer.normalize("   ").is_none());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let vocab = panel();
        let normalizer = NameNormalizer::new(&vocab);

        for def in vocab.entries() {
            let once = normalizer.normalize(&def.name).unwrap();
            let twice = normalizer.normalize(&once.name).unwrap();
            assert_eq!(once.name, twice.name, "{} did not round-trip", def.name);
        }
    }
}
