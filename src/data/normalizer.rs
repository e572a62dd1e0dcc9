// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans raw section text before it is matched or scored.
//
// Why do we need to clean text?
//   The wiki export leaves behind formatting residue:
//   - Colour macros rendered as "#1f2e3d\nINLINE"
//   - Table cells joined with runs of spaces and newlines
//   - Leading/trailing whitespace from empty paragraphs
//
// If we don't clean these, phrase matching fails across line
// breaks and the quality scorer counts the markers as words.
//
// Cleaning steps (applied in order):
//   1. Remove every colour-code + "INLINE" marker
//   2. Collapse every whitespace run (newlines included) to
//      one space and trim both ends
//
// Normalising is idempotent: step 2 removes every newline, so
// step 1 can never find a new marker on a second pass.
//
// Reference: Rust Book §8 (Strings in Rust)

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A 6-hex-digit colour code, optional whitespace, a line break, then INLINE
    static ref INLINE_MARKER: Regex = Regex::new(r"#[a-fA-F0-9]{6}\s*\nINLINE").unwrap();
}

pub struct Normalizer;

impl Normalizer {
    /// Create a new Normalizer instance
    pub fn new() -> Self {
        Self
    }

    /// Strip formatting markers and collapse whitespace.
    /// Empty input gives empty output.
    pub fn normalize(&self, text: &str) -> String {
        // ── Step 1: Remove formatting markers ────────────────────────────────
        let stripped = INLINE_MARKER.replace_all(text, "");

        // ── Step 2: Collapse whitespace ──────────────────────────────────────
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Number of whitespace-separated words after normalising.
    pub fn word_count(&self, text: &str) -> usize {
        INLINE_MARKER
            .replace_all(text, "")
            .split_whitespace()
            .count()
    }
}

/// Implement Default so Normalizer can be created with Normalizer::default()
impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
