// ============================================================
// Layer 2 — Search Use Case
// ============================================================
// One query, start to finish:
//   1. Load the corpus from the CorpusSource
//   2. Scan it for documents containing the query
//   3. Select the best of them under the word budget
//
// Nothing is printed here; the CLI renders the outcome.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::domain::match_result::Selection;
use crate::domain::traits::CorpusSource;
use crate::infra::config::SearchConfig;
use crate::search::{scanner::DocumentScanner, selector::DocumentSelector};

/// What a query produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub query:     String,
    /// Documents that matched and passed the recency filter
    pub matched:   usize,
    pub selection: Selection,
}

impl SearchOutcome {
    pub fn has_matches(&self) -> bool {
        self.matched > 0
    }
}

pub struct SearchUseCase<S: CorpusSource> {
    source:   S,
    scanner:  DocumentScanner,
    selector: DocumentSelector,
}

impl<S: CorpusSource> SearchUseCase<S> {
    pub fn new(config: &SearchConfig, source: S) -> Self {
        Self {
            source,
            scanner:  DocumentScanner::from_config(config),
            selector: DocumentSelector::new(config.max_words),
        }
    }

    /// Run the query against the corpus as it is right now
    pub fn execute(&self, query: &str) -> Result<SearchOutcome> {
        self.execute_at(query, Utc::now())
    }

    /// Run the query with an explicit "now" for the recency filter
    pub fn execute_at(&self, query: &str, now: DateTime<Utc>) -> Result<SearchOutcome> {
        let docs = self.source.load_all()?;
        if docs.is_empty() {
            tracing::warn!("Corpus is empty, nothing to search");
        }

        let matches = self.scanner.scan(&docs, query, now);
        let matched = matches.len();

        let selection = self.selector.select(matches);

        Ok(SearchOutcome {
            query: query.to_string(),
            matched,
            selection,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::JsonCorpusLoader;
    use crate::domain::document::RcaDocument;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn rca(name: &str, date: &str, root_cause: &str) -> RcaDocument {
        RcaDocument::new(
            name,
            [
                ("Incident General Information", format!("Incident date: {date}")),
                ("Summary", "Customers saw checkout errors.".to_string()),
                ("Root Cause", root_cause.to_string()),
            ],
        )
    }

    #[test]
    fn test_query_absent_everywhere_gives_no_matches() {
        let corpus = vec![rca("INC-1.json", "2025-01-01", "disk full")];
        let outcome = SearchUseCase::new(&SearchConfig::default(), corpus)
            .execute_at("kernel panic", now())
            .unwrap();

        assert!(!outcome.has_matches());
        assert!(outcome.selection.is_empty());
        assert_eq!(outcome.query, "kernel panic");
    }

    #[test]
    fn test_budget_limits_selection() {
        let long  = "dns outage ".repeat(30);
        let short = "dns outage in the edge network";
        let corpus = vec![
            rca("INC-1.json", "2025-01-01", &long),
            rca("INC-2.json", "2025-02-01", short),
        ];
        let cfg = SearchConfig { max_words: 20, ..SearchConfig::default() };

        let outcome = SearchUseCase::new(&cfg, corpus).execute_at("dns outage", now()).unwrap();

        assert_eq!(outcome.matched, 2);
        assert_eq!(outcome.selection.len(), 1);
        assert_eq!(outcome.selection.documents[0].filename, "INC-2.json");
        assert_eq!(outcome.selection.total_words, 6);
    }

    #[test]
    fn test_end_to_end_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("INC-10.json"),
            r#"{
                "title": "RCA INC-10 database failover",
                "sections": {
                    "Incident General Information": "Opened Mar 3, 2025",
                    "Summary": "The primary database failover triggered a cascading timeout across the cluster.",
                    "Root Cause": "Replication lag"
                }
            }"#,
        )
        .unwrap();
        fs::write(dir.path().join("corrupt.json"), "{").unwrap();
        fs::write(
            dir.path().join("INC-11.json"),
            r#"{"sections": {"Summary": "database failover in 2019-01-01 drill"}}"#,
        )
        .unwrap();

        let cfg = SearchConfig { corpus_dir: dir.path().to_path_buf(), ..SearchConfig::default() };
        let outcome = SearchUseCase::new(&cfg, JsonCorpusLoader::new(&cfg.corpus_dir))
            .execute_at("Database Failover", now())
            .unwrap();

        assert_eq!(outcome.matched, 1);
        let doc = &outcome.selection.documents[0];
        assert_eq!(doc.filename, "INC-10.json");
        assert_eq!(doc.incident_number, "INC-10");
        assert_eq!(doc.date_label(), "2025-03-03");
        assert_eq!(doc.section_matches[0].section, "Summary");
    }

    #[test]
    fn test_unreadable_corpus_is_an_error() {
        let dir = TempDir::new().unwrap();
        let loader = JsonCorpusLoader::new(dir.path().join("missing"));
        assert!(SearchUseCase::new(&SearchConfig::default(), loader)
            .execute_at("dns", now())
            .is_err());
    }
}
