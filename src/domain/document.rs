// ============================================================
// Layer 3 — RCA Document Domain Type
// ============================================================
// Represents a single incident record loaded from the corpus.
// By the time an RcaDocument exists, the wiki page has already
// been split into named sections by the extraction job, so
// every section is just a name and a block of raw text.
//
// The seven recognised section names form a fixed, ordered
// list. Iteration over a document always follows that order
// first, then any extra keys alphabetically, so the report is
// stable between runs.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (HashMap / BTreeMap)

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

/// Section holding the incident metadata table (dates, ids, owners)
pub const INCIDENT_GENERAL_INFORMATION: &str = "Incident General Information";

/// Free-text summary of the incident
pub const SUMMARY: &str = "Summary";

/// The recognised section names, in the order they appear on an RCA page.
pub static SECTION_NAMES: [&str; 7] = [
    INCIDENT_GENERAL_INFORMATION,
    SUMMARY,
    "Root Cause",
    "Actions Taken",
    "Timeline of Events",
    "Lessons Learned",
    "Planned Actions",
];

/// Sections whose dates decide how recent an incident is.
pub static DATE_SECTIONS: [&str; 2] = [INCIDENT_GENERAL_INFORMATION, SUMMARY];

/// Sections shorter than this are treated as unfilled when
/// deciding whether a page is still a blank template.
const MIN_FILLED_SECTION_CHARS: usize = 50;

/// Placeholder markers left behind by the RCA page template.
const TEMPLATE_MARKERS: [&str; 2] = ["TLDR:", "Example:"];

lazy_static! {
    static ref INCIDENT_NUMBER: Regex = Regex::new(r"INC-\d+").unwrap();
}

/// One incident post-mortem, as persisted by the extraction job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RcaDocument {
    /// File name of the corpus entry, unique within the corpus
    pub filename: String,

    /// Page title from the wiki, when the extractor recorded it
    pub title: Option<String>,

    /// Wiki page id, when the extractor recorded it
    pub page_id: Option<String>,

    /// When the page was extracted. Informational only.
    pub extraction_date: Option<String>,

    /// Section name → raw section text
    pub sections: BTreeMap<String, String>,
}

impl RcaDocument {
    /// Create a document with just an identifier and its sections.
    ///
    /// Example:
    ///   let doc = RcaDocument::new("INC-42.json", [("Summary", "Database outage")]);
    pub fn new<I, K, V>(filename: impl Into<String>, sections: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            filename: filename.into(),
            sections: sections
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Text of a section, or "" when the section is absent.
    pub fn section(&self, name: &str) -> &str {
        self.sections.get(name).map(String::as_str).unwrap_or("")
    }

    /// Sections in canonical order: the known names first, then any
    /// unrecognised keys in lexical order.
    pub fn ordered_sections(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let known = SECTION_NAMES
            .iter()
            .filter_map(move |name| self.sections.get_key_value(*name));
        let extra = self
            .sections
            .iter()
            .filter(|(name, _)| !SECTION_NAMES.contains(&name.as_str()));

        known
            .chain(extra)
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// Incident number taken from the title (`INC-1234`), falling back
    /// to the file stem.
    pub fn incident_number(&self) -> String {
        if let Some(found) = self
            .title
            .as_deref()
            .and_then(|title| INCIDENT_NUMBER.find(title))
        {
            return found.as_str().to_string();
        }

        self.filename
            .strip_suffix(".json")
            .unwrap_or(&self.filename)
            .to_string()
    }

    /// True when more than half of the recognised sections are empty,
    /// very short, or still hold template placeholder text.
    pub fn looks_like_template(&self) -> bool {
        let unfilled = SECTION_NAMES
            .iter()
            .filter(|name| {
                let text = self.section(name).trim();
                text.is_empty()
                    || text.chars().count() < MIN_FILLED_SECTION_CHARS
                    || TEMPLATE_MARKERS.iter().any(|m| text.contains(m))
            })
            .count();

        unfilled > SECTION_NAMES.len() / 2
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "The primary database cluster failed over after a disk filled up on the leader node.";

    #[test]
    fn test_ordered_sections_follow_page_order() {
        let doc = RcaDocument::new(
            "INC-1.json",
            [
                ("Zeta Notes", "z"),
                ("Root Cause", "rc"),
                ("Summary", "s"),
                ("Alpha Notes", "a"),
            ],
        );

        let names: Vec<&str> = doc.ordered_sections().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Summary", "Root Cause", "Alpha Notes", "Zeta Notes"]);
    }

    #[test]
    fn test_missing_section_reads_as_empty() {
        let doc = RcaDocument::new("INC-1.json", [("Summary", "text")]);
        assert_eq!(doc.section("Root Cause"), "");
        assert_eq!(doc.section("Summary"), "text");
    }

    #[test]
    fn test_incident_number_from_title() {
        let mut doc = RcaDocument::new("page-77.json", Vec::<(String, String)>::new());
        doc.title = Some("RCA: INC-4821 payment gateway outage".to_string());
        assert_eq!(doc.incident_number(), "INC-4821");
    }

    #[test]
    fn test_incident_number_falls_back_to_file_stem() {
        let doc = RcaDocument::new("INC-9.json", Vec::<(String, String)>::new());
        assert_eq!(doc.incident_number(), "INC-9");
    }

    #[test]
    fn test_blank_page_looks_like_template() {
        let doc = RcaDocument::new(
            "INC-2.json",
            [("Summary", "TLDR: what happened"), ("Root Cause", "Example: bad deploy")],
        );
        assert!(doc.looks_like_template());
    }

    #[test]
    fn test_filled_page_is_not_template() {
        let doc = RcaDocument::new(
            "INC-3.json",
            SECTION_NAMES.iter().map(|name| (*name, LONG)),
        );
        assert!(!doc.looks_like_template());
    }
}
