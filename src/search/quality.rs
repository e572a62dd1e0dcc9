// ============================================================
// Layer 5 — Quality Scorer
// ============================================================
// Estimates how substantive a block of text is, on a 0..1 scale.
//
// Template pages and placeholder text tend to be short, with
// uniform sentence and word lengths, repeated words and little
// incident vocabulary. Real write-ups vary in all of those.
// Four signals are combined:
//
//   sentence variation — std dev of words per sentence / cap
//   word variation     — std dev of characters per word / cap
//   info density       — distinct words / total words
//   tech terms         — domain-vocabulary words / total × boost
//
// Each signal is clamped to 1 and weighted (0.3 / 0.2 / 0.3 / 0.2
// by default, see QualityWeights).
//
// Reference: Rust Book §8 (HashSet), §13 (Iterators)

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::normalizer::Normalizer;
use crate::infra::config::QualityWeights;

/// Incident and infrastructure words that mark a write-up as technical.
pub const TECHNICAL_TERMS: [&str; 20] = [
    "aws", "api", "service", "system", "error", "failure", "impact",
    "resolution", "metrics", "data", "configuration", "outage", "incident",
    "region", "server", "database", "network", "infrastructure",
    "deployment", "monitoring",
];

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

pub struct QualityScorer {
    weights:    QualityWeights,
    vocabulary: HashSet<String>,
    normalizer: Normalizer,
}

impl QualityScorer {
    /// A scorer with the given weights and domain vocabulary.
    /// Vocabulary entries are compared lower-cased.
    pub fn new<'a>(weights: QualityWeights, vocabulary: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            weights,
            vocabulary: vocabulary.into_iter().map(str::to_lowercase).collect(),
            normalizer: Normalizer::new(),
        }
    }

    /// A scorer with the built-in incident vocabulary
    pub fn with_weights(weights: QualityWeights) -> Self {
        Self::new(weights, TECHNICAL_TERMS)
    }

    /// Score a block of raw text. Always within [0, 1]; empty text scores 0.
    pub fn score(&self, text: &str) -> f64 {
        let clean = self.normalizer.normalize(text);

        let sentence_lengths: Vec<f64> = SENTENCE_END
            .split(&clean)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.split_whitespace().count() as f64)
            .collect();

        if sentence_lengths.is_empty() {
            return 0.0;
        }

        let words: Vec<&str> = clean.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }
        let total = words.len() as f64;

        let word_lengths: Vec<f64> = words.iter().map(|w| w.chars().count() as f64).collect();

        let sentence_length_var = std_dev(&sentence_lengths);
        let word_length_var     = std_dev(&word_lengths);

        // Distinct words are counted case-sensitively
        let unique       = words.iter().collect::<HashSet<_>>().len() as f64;
        let info_density = unique / total;

        let tech_terms = words
            .iter()
            .filter(|w| self.vocabulary.contains(&w.to_lowercase()))
            .count() as f64;
        let tech_term_ratio = tech_terms / total;

        let w = &self.weights;
        let score = w.sentence_variation * capped(sentence_length_var / w.sentence_variation_cap)
            + w.word_variation * capped(word_length_var / w.word_variation_cap)
            + w.info_density * info_density
            + w.tech_terms * capped(tech_term_ratio * w.tech_term_boost);

        score.clamp(0.0, 1.0)
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::with_weights(QualityWeights::default())
    }
}

fn capped(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.min(1.0) }
}

/// Population standard deviation. Zero for fewer than two values.
fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n    = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var  = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    var.sqrt()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let s = QualityScorer::default();
        assert_eq!(s.score(""), 0.0);
        assert_eq!(s.score("   \n  "), 0.0);
        assert_eq!(s.score("...!?"), 0.0);
    }

    #[test]
    fn test_std_dev_is_population() {
        assert!(close(std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0));
        assert_eq!(std_dev(&[3.0]), 0.0);
    }

    #[test]
    fn test_known_score() {
        // One sentence → no sentence variation.
        // Word lengths 8 and 7 → std 0.5 → 0.2 * 0.5/3
        // Both words distinct → 0.3
        // "database" is a term, "outage." keeps its period → ratio 0.5, boosted past the cap → 0.2
        let s = QualityScorer::default();
        assert!(close(s.score("Database outage."), 0.2 * (0.5 / 3.0) + 0.3 + 0.2));
    }

    #[test]
    fn test_terms_are_case_insensitive() {
        let s = QualityScorer::default();
        assert!(close(s.score("API"), s.score("api")));
    }

    #[test]
    fn test_repetitive_template_scores_below_real_writeup() {
        let s = QualityScorer::default();
        let template = "TBD. TBD. TBD. TBD. TBD. TBD.";
        let writeup  = "A misconfigured deployment removed the database connection pool limit. \
                        Within minutes the primary server exhausted file handles and the API started \
                        returning errors to every region. Monitoring paged the on-call engineer! \
                        Rolling back the configuration restored service.";
        assert!(s.score(writeup) > s.score(template));
    }

    #[test]
    fn test_custom_vocabulary() {
        let plain  = QualityScorer::new(QualityWeights::default(), ["kafka"]);
        let stock  = QualityScorer::default();
        assert!(plain.score("kafka lag") > stock.score("kafka lag"));
    }

    proptest! {
        #[test]
        fn prop_score_is_bounded(text in "(?s).{0,300}") {
            let s     = QualityScorer::default();
            let score = s.score(&text);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_wordy_score_is_bounded(words in proptest::collection::vec("[a-zA-Z]{1,12}[.!?]?", 0..80)) {
            let s     = QualityScorer::default();
            let score = s.score(&words.join(" "));
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
