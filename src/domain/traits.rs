// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer never talks to the filesystem directly.
// It asks a CorpusSource for documents, so the JSON directory
// loader can be swapped for an in-memory corpus in tests or a
// different store later without touching the search pipeline.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::document::RcaDocument;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the RCA corpus.
///
/// Implementations:
///   - JsonCorpusLoader → a directory of extracted .json files
///   - Vec<RcaDocument> → an in-memory corpus
pub trait CorpusSource {
    /// Load every readable document.
    /// Individual bad entries are skipped; only an unusable source
    /// as a whole is an error.
    fn load_all(&self) -> Result<Vec<RcaDocument>>;
}

impl CorpusSource for Vec<RcaDocument> {
    fn load_all(&self) -> Result<Vec<RcaDocument>> {
        Ok(self.clone())
    }
}
