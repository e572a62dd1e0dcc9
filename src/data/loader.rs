// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Loads extracted RCA documents from a directory of .json files.
//
// What an entry looks like on disk (written by the extractor):
//
//   {
//     "title": "RCA - INC-1234 checkout outage",
//     "page_id": "884512",
//     "extraction_date": "2024-05-02T10:14:00",
//     "sections": {
//       "Incident General Information": "...",
//       "Summary": "...",
//       ...
//     }
//   }
//
// Only "sections" is required. Entries are handled like this:
//   - unreadable or invalid JSON      → warn and skip
//   - not an object / no "sections"   → skip quietly
//   - non-string section values       → dropped, rest kept
//
// One bad file never fails the whole load. Only an unreadable
// corpus directory is an error.
//
// Reference: serde_json documentation (Value)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::RcaDocument;
use crate::domain::traits::CorpusSource;

/// Loads every .json file directly inside a directory.
/// Implements the CorpusSource trait from Layer 3.
pub struct JsonCorpusLoader {
    /// Path to the directory containing the extracted documents
    dir: PathBuf,
}

impl JsonCorpusLoader {
    /// Create a new JsonCorpusLoader pointed at a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Implement the CorpusSource trait so the application layer
/// can call load_all() without knowing about the file layout
impl CorpusSource for JsonCorpusLoader {
    fn load_all(&self) -> Result<Vec<RcaDocument>> {
        let mut paths = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read corpus directory '{}'", self.dir.display()))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            }
        }

        // read_dir order is platform dependent
        paths.sort();

        let mut docs = Vec::new();
        for path in &paths {
            match load_single_entry(path) {
                Ok(Some(doc)) => {
                    tracing::debug!(
                        "Loaded: {} (page {}, extracted {}, {} sections)",
                        doc.filename,
                        doc.page_id.as_deref().unwrap_or("?"),
                        doc.extraction_date.as_deref().unwrap_or("?"),
                        doc.sections.len()
                    );
                    docs.push(doc);
                }
                Ok(None) => {
                    tracing::debug!("Ignoring '{}': no sections mapping", path.display());
                }
                // Log a warning but continue; one bad file does not fail the load
                Err(e) => {
                    tracing::warn!("Cannot process file '{}': {:#}", path.display(), e);
                }
            }
        }

        tracing::info!(
            "Loaded {} of {} corpus files from '{}'",
            docs.len(),
            paths.len(),
            self.dir.display()
        );
        Ok(docs)
    }
}

/// Read and parse one corpus file.
/// `Ok(None)` means the JSON is valid but is not an RCA entry.
fn load_single_entry(path: &Path) -> Result<Option<RcaDocument>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in '{}'", path.display()))?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(document_from_value(filename, &value))
}

/// On-disk shape of one corpus entry. Metadata stays loose because
/// page ids come out of the wiki as either strings or numbers, and
/// section values are filtered after deserialisation.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    title: Option<Value>,

    #[serde(default)]
    page_id: Option<Value>,

    #[serde(default)]
    extraction_date: Option<Value>,

    sections: BTreeMap<String, Value>,
}

/// Build a document from a parsed entry, or `None` when the entry
/// is not an object with a `sections` object.
pub fn document_from_value(filename: String, value: &Value) -> Option<RcaDocument> {
    // A derived struct also accepts JSON arrays; only objects are entries
    if !value.is_object() {
        return None;
    }
    let entry = RawEntry::deserialize(value).ok()?;

    let offered = entry.sections.len();
    let mut doc = RcaDocument::new(
        filename,
        entry.sections.into_iter().filter_map(|(name, text)| match text {
            Value::String(t) => Some((name, t)),
            _ => None,
        }),
    );

    if doc.sections.len() < offered {
        tracing::debug!(
            "{}: dropped {} non-text sections",
            doc.filename,
            offered - doc.sections.len()
        );
    }

    doc.title           = string_field(entry.title);
    doc.page_id         = string_field(entry.page_id);
    doc.extraction_date = string_field(entry.extraction_date);

    Some(doc)
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
