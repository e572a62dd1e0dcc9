// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between the extracted .json files on disk and the
// search pipeline:
//
//   *.json files
//       │
//       ▼
//   JsonCorpusLoader  → reads files, keeps entries with sections
//       │
//       ▼
//   Normalizer        → strips markers, collapses whitespace
//       │
//       ▼
//   DateExtractor     → finds the newest incident date
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads RCA .json files from a directory
pub mod loader;

/// Cleans and normalises raw section text
pub mod normalizer;

/// Extracts calendar dates from free text
pub mod dates;
