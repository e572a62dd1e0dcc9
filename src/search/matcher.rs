// ============================================================
// Layer 5 — Section Matcher
// ============================================================
// Phrase search of a query inside one section.
//
// Both sides are normalised and lower-cased, then the query
// must appear as a run of whole words:
//
//   query:   "database failover"
//   section: "... the primary database failover triggered ..."  → match
//   section: "... the databases failover ..."                   → no match
//
// On a hit we return a snippet of up to `context_words` words
// either side of the first occurrence, wrapped in "...".
// Independent keyword matching was considered and rejected:
// it surfaces far more unrelated incidents for short queries.

use crate::data::normalizer::Normalizer;

pub struct SectionMatcher {
    context_words: usize,
    normalizer:    Normalizer,
}

impl SectionMatcher {
    pub fn new(context_words: usize) -> Self {
        Self { context_words, normalizer: Normalizer::new() }
    }

    /// Snippet around the first whole-word occurrence of `query`,
    /// or `None` when the section does not contain it.
    pub fn find(&self, section_text: &str, query: &str) -> Option<String> {
        let section = self.normalizer.normalize(section_text).to_lowercase();
        let phrase  = self.normalizer.normalize(query).to_lowercase();

        if section.is_empty() || phrase.is_empty() || !section.contains(&phrase) {
            return None;
        }

        let words: Vec<&str>        = section.split_whitespace().collect();
        let phrase_words: Vec<&str> = phrase.split_whitespace().collect();

        let at = words
            .windows(phrase_words.len())
            .position(|window| window == phrase_words.as_slice())?;

        let start = at.saturating_sub(self.context_words);
        let end   = (at + phrase_words.len() + self.context_words).min(words.len());

        Some(format!("...{}...", words[start..end].join(" ")))
    }
}
