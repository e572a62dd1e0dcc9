// ============================================================
// Layer 5 — Document Selector
// ============================================================
// Picks which matched documents to show under a total-word budget.
//
// Greedy by quality:
//   1. Sort by quality_score, highest first (ties keep scan order)
//   2. Walk the list; take a document if it still fits the budget
//   3. A document that does not fit is skipped, and the walk
//      continues; a later, smaller document may still fit
//
// This approximates 0/1 knapsack on quality per document. It is
// not guaranteed optimal: one large high-scoring document can
// crowd out several smaller ones whose combined quality is
// higher. An exact answer needs a DP over discretised word
// counts; greedy keeps the ordering predictable.

use crate::domain::match_result::{MatchResult, Selection};

pub struct DocumentSelector {
    max_words: usize,
}

impl DocumentSelector {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn select(&self, mut candidates: Vec<MatchResult>) -> Selection {
        // sort_by is stable, so equal scores keep scan order
        candidates.sort_by(|a, b| b.quality_score.total_cmp(&a.quality_score));

        let offered       = candidates.len();
        let mut selection = Selection::default();

        for candidate in candidates {
            let total = selection.total_words + candidate.word_count;
            if total <= self.max_words {
                selection.total_words = total;
                selection.documents.push(candidate);
            } else {
                tracing::debug!(
                    "Skipping {} ({} words): would reach {} of {} allowed",
                    candidate.filename,
                    candidate.word_count,
                    total,
                    self.max_words
                );
            }
        }

        if offered > 0 && selection.is_empty() {
            tracing::warn!(
                "All {} matches exceed the {} word budget on their own",
                offered,
                self.max_words
            );
        }

        tracing::info!(
            "Selected {} documents ({} of {} words)",
            selection.len(),
            selection.total_words,
            self.max_words
        );
        selection
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::match_result::SectionMatch;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn candidate(name: &str, quality_score: f64, word_count: usize) -> MatchResult {
        MatchResult {
            filename:            name.to_string(),
            incident_number:     name.to_string(),
            representative_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            section_matches:     vec![SectionMatch {
                section: "Summary".to_string(),
                context: "...outage...".to_string(),
            }],
            quality_score,
            word_count,
        }
    }

    fn names(selection: &Selection) -> Vec<&str> {
        selection.documents.iter().map(|d| d.filename.as_str()).collect()
    }

    #[test]
    fn test_highest_quality_first_within_budget() {
        let selection = DocumentSelector::new(24_000).select(vec![
            candidate("ten", 0.9, 10_000),
            candidate("nine", 0.8, 9_000),
            candidate("eight", 0.95, 8_000),
        ]);

        assert_eq!(names(&selection), vec!["eight", "ten"]);
        assert_eq!(selection.total_words, 18_000);
    }

    #[test]
    fn test_rejection_does_not_stop_the_walk() {
        let selection = DocumentSelector::new(24_000).select(vec![
            candidate("a", 0.9, 12_000),
            candidate("b", 0.8, 5_000),
            candidate("c", 0.7, 11_000),
            candidate("d", 0.6, 7_000),
        ]);

        // c would reach 28000, d still fits at 24000
        assert_eq!(names(&selection), vec!["a", "b", "d"]);
        assert_eq!(selection.total_words, 24_000);
    }

    #[test]
    fn test_ties_keep_scan_order() {
        let selection = DocumentSelector::new(100).select(vec![
            candidate("first", 0.5, 10),
            candidate("better", 0.7, 10),
            candidate("second", 0.5, 10),
        ]);
        assert_eq!(names(&selection), vec!["better", "first", "second"]);
    }

    #[test]
    fn test_zero_budget_takes_only_empty_documents() {
        let selection = DocumentSelector::new(0).select(vec![
            candidate("big", 0.9, 1),
            candidate("empty", 0.1, 0),
        ]);
        assert_eq!(names(&selection), vec!["empty"]);
    }

    #[test]
    fn test_no_candidates() {
        let selection = DocumentSelector::new(24_000).select(Vec::new());
        assert!(selection.is_empty());
        assert_eq!(selection.total_words, 0);
    }

    proptest! {
        #[test]
        fn prop_budget_is_never_exceeded(
            budget in 0usize..50_000,
            items in proptest::collection::vec((0.0f64..=1.0, 0usize..20_000), 0..30),
        ) {
            let candidates = items
                .iter()
                .enumerate()
                .map(|(i, (q, w))| candidate(&format!("doc-{i}"), *q, *w))
                .collect();

            let selection = DocumentSelector::new(budget).select(candidates);
            let summed: usize = selection.documents.iter().map(|d| d.word_count).sum();

            prop_assert!(selection.total_words <= budget);
            prop_assert_eq!(summed, selection.total_words);
            prop_assert!(selection
                .documents
                .windows(2)
                .all(|pair| pair[0].quality_score >= pair[1].quality_score));
        }
    }
}
