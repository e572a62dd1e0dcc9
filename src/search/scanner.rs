// ============================================================
// Layer 5 — Document Scanner
// ============================================================
// Walks the corpus once per query and turns every document
// that contains the query into a scored MatchResult.
//
// Per document:
//   1. Match the query against every section (page order)
//   2. No matched section            → skip
//   3. Newest date in general info + summary
//        none, or older than horizon → skip
//   4. quality_score = best score over matched sections
//      word_count    = sum of normalised words in matched sections
//
// Documents are independent of each other, so the order of
// the output is simply corpus order.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::data::{dates::DateExtractor, normalizer::Normalizer};
use crate::domain::document::RcaDocument;
use crate::domain::match_result::{MatchResult, SectionMatch};
use crate::infra::config::SearchConfig;
use crate::search::{matcher::SectionMatcher, quality::QualityScorer};

pub struct DocumentScanner {
    matcher:      SectionMatcher,
    dates:        DateExtractor,
    scorer:       QualityScorer,
    normalizer:   Normalizer,
    recency_days: i64,
}

impl DocumentScanner {
    pub fn new(
        matcher:      SectionMatcher,
        dates:        DateExtractor,
        scorer:       QualityScorer,
        recency_days: i64,
    ) -> Self {
        Self { matcher, dates, scorer, normalizer: Normalizer::new(), recency_days }
    }

    /// A scanner wired up from the search configuration
    pub fn from_config(cfg: &SearchConfig) -> Self {
        Self::new(
            SectionMatcher::new(cfg.context_words),
            DateExtractor::new(),
            QualityScorer::with_weights(cfg.weights),
            cfg.recency_days,
        )
    }

    /// Score every document that matches `query` and is recent enough
    /// relative to `now`.
    pub fn scan(&self, docs: &[RcaDocument], query: &str, now: DateTime<Utc>) -> Vec<MatchResult> {
        let results: Vec<MatchResult> = docs
            .iter()
            .filter_map(|doc| self.scan_document(doc, query, now))
            .collect();

        tracing::info!(
            "Scanned {} documents, {} matched \"{}\"",
            docs.len(),
            results.len(),
            query
        );
        results
    }

    /// Score a single document, or `None` if it is filtered out.
    pub fn scan_document(&self, doc: &RcaDocument, query: &str, now: DateTime<Utc>) -> Option<MatchResult> {
        let matched: Vec<(&str, &str, String)> = doc
            .ordered_sections()
            .filter_map(|(name, text)| {
                self.matcher
                    .find(text, query)
                    .map(|context| (name, text, context))
            })
            .collect();

        if matched.is_empty() {
            return None;
        }

        if doc.looks_like_template() {
            tracing::debug!("{}: matched, but most sections look unfilled", doc.filename);
        }

        let Some(date) = self.dates.representative_date(doc) else {
            tracing::debug!("{}: matched but has no recognisable date", doc.filename);
            return None;
        };

        if !self.is_recent(date, now) {
            tracing::debug!("{}: matched but dated {} is too old", doc.filename, date);
            return None;
        }

        let quality_score = matched
            .iter()
            .map(|(_, text, _)| self.scorer.score(text))
            .fold(0.0, f64::max);

        let word_count = matched
            .iter()
            .map(|(_, text, _)| self.normalizer.word_count(text))
            .sum();

        Some(MatchResult {
            filename:            doc.filename.clone(),
            incident_number:     doc.incident_number(),
            representative_date: date,
            section_matches:     matched
                .into_iter()
                .map(|(name, _, context)| SectionMatch { section: name.to_string(), context })
                .collect(),
            quality_score,
            word_count,
        })
    }

    /// True when `date` (taken at midnight) is no older than the horizon.
    /// A horizon outside chrono's range counts as not recent.
    pub fn is_recent(&self, date: NaiveDate, now: DateTime<Utc>) -> bool {
        let horizon = Duration::try_days(self.recency_days)
            .and_then(|window| now.naive_utc().checked_sub_signed(window));

        match (horizon, date.and_hms_opt(0, 0, 0)) {
            (Some(horizon), Some(midnight)) => midnight >= horizon,
            _ => false,
        }
    }
}
