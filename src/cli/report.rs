// ============================================================
// Layer 1 — Report Renderer
// ============================================================
// Formats a SearchOutcome as plain text. Writes to any
// io::Write so tests can render into a Vec<u8>.
//
// Layout:
//   header (UTC timestamp, login)
//   "Selected N documents (Total words: W)"
//   per document: file, incident, date, matched sections
//   summary: file + date per selected document

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::io::Write;

use crate::application::search_use_case::SearchOutcome;

const RULE: &str = "----------------------------------------";

pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn write_header<W: Write>(&self, out: &mut W, now: DateTime<Utc>, user: &str) -> Result<()> {
        writeln!(
            out,
            "Current Date and Time (UTC - YYYY-MM-DD HH:MM:SS formatted): {}",
            now.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "Current User's Login: {user}")?;
        writeln!(out, "{RULE}\n")?;
        Ok(())
    }

    pub fn write_outcome<W: Write>(&self, out: &mut W, outcome: &SearchOutcome) -> Result<()> {
        if !outcome.has_matches() {
            writeln!(out, "No matches found for \"{}\" in any section", outcome.query)?;
            return Ok(());
        }

        let selection = &outcome.selection;
        writeln!(
            out,
            "Selected {} documents (Total words: {})",
            selection.len(),
            selection.total_words
        )?;
        writeln!(out, "{RULE}\n")?;

        for doc in &selection.documents {
            writeln!(out, "\nFound in file: {}", doc.filename)?;
            writeln!(out, "Incident: {}", doc.incident_number)?;
            writeln!(out, "Date: {}", doc.date_label())?;
            writeln!(out, "Matches found in sections:")?;
            writeln!(out, "{RULE}")?;
            for m in &doc.section_matches {
                writeln!(out, "\n{}:", m.section)?;
                writeln!(out, "{}", m.context)?;
            }
            writeln!(out, "{RULE}")?;
        }

        writeln!(out, "\nSummary of selected documents:")?;
        writeln!(out, "{RULE}")?;
        for doc in &selection.documents {
            writeln!(out, "Found in file: {}", doc.filename)?;
            writeln!(out, "  Date: {}", doc.date_label())?;
        }

        Ok(())
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}
