// ============================================================
// Layer 3 — Match Result Domain Types
// ============================================================
// A MatchResult is what the scanner produces for one document
// whose sections contained the query. It is created, scored
// and thrown away inside a single query; nothing here is
// ever written to disk.
//
// A Selection is the budget-constrained subset the selector
// hands back to the CLI for rendering.

use chrono::NaiveDate;

/// One matched section: its name and the snippet around the hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMatch {
    pub section: String,
    pub context: String,
}

/// A scored candidate document.
///
/// Invariant: `section_matches` is never empty. The scanner only
/// builds a MatchResult after at least one section matched.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Corpus file name of the matched document
    pub filename: String,

    /// Incident number shown alongside the file name
    pub incident_number: String,

    /// Newest date found in the general-information and summary sections
    pub representative_date: NaiveDate,

    /// Matched sections in page order
    pub section_matches: Vec<SectionMatch>,

    /// Best quality score over the matched sections, in [0, 1]
    pub quality_score: f64,

    /// Total normalised word count of the matched sections
    pub word_count: usize,
}

impl MatchResult {
    /// The representative date formatted as YYYY-MM-DD
    pub fn date_label(&self) -> String {
        self.representative_date.format("%Y-%m-%d").to_string()
    }
}

/// The documents chosen under the word budget, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub documents:   Vec<MatchResult>,
    pub total_words: usize,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label_is_iso() {
        let result = MatchResult {
            filename:            "INC-1.json".to_string(),
            incident_number:     "INC-1".to_string(),
            representative_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            section_matches:     vec![SectionMatch {
                section: "Summary".to_string(),
                context: "...outage...".to_string(),
            }],
            quality_score:       0.5,
            word_count:          1,
        };
        assert_eq!(result.date_label(), "2024-03-05");
    }

    #[test]
    fn test_empty_selection() {
        let selection = Selection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
        assert_eq!(selection.total_words, 0);
    }
}
