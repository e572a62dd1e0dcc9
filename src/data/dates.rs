// ============================================================
// Layer 4 — Date Extractor
// ============================================================
// Finds calendar dates in free text. RCA pages are written by
// many different people, so the same incident date shows up
// in several shapes:
//
//   2024-03-15                 → ISO
//   Mar 15, 2024 / March 15 2024 → month name first
//   15 March 2024              → day first
//   Friday March 15, 2024      → weekday prefixed
//
// Each shape is a DatePattern variant that owns its regex and
// knows which capture group holds the day, month and year.
// Patterns run independently over every line; a match that
// does not form a real date (e.g. "Feb 30, 2024") is skipped.
//
// Reference: chrono crate documentation (NaiveDate)
//            regex crate documentation (captures_iter)

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::domain::document::{RcaDocument, DATE_SECTIONS};

lazy_static! {
    static ref ISO: Regex = Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap();

    static ref MONTH_DAY_YEAR: Regex = Regex::new(
        r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* (\d{1,2}),? (\d{4})\b"
    ).unwrap();

    static ref DAY_MONTH_YEAR: Regex = Regex::new(
        r"(?i)\b(\d{1,2}) (Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*,? (\d{4})\b"
    ).unwrap();

    static ref WEEKDAY_MONTH_DAY_YEAR: Regex = Regex::new(
        r"(?i)\b(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun)[a-z]* (Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* (\d{1,2}),? (\d{4})\b"
    ).unwrap();
}

/// The recognised date shapes, tried in this order on every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `YYYY-MM-DD`
    Iso,
    /// `<Month> D[D][,] YYYY`
    MonthDayYear,
    /// `D[D] <Month>[,] YYYY`
    DayMonthYear,
    /// `<Weekday> <Month> D[D][,] YYYY`
    WeekdayMonthDayYear,
}

impl DatePattern {
    pub const ALL: [DatePattern; 4] = [
        DatePattern::Iso,
        DatePattern::MonthDayYear,
        DatePattern::DayMonthYear,
        DatePattern::WeekdayMonthDayYear,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            DatePattern::Iso                 => &*ISO,
            DatePattern::MonthDayYear        => &*MONTH_DAY_YEAR,
            DatePattern::DayMonthYear        => &*DAY_MONTH_YEAR,
            DatePattern::WeekdayMonthDayYear => &*WEEKDAY_MONTH_DAY_YEAR,
        }
    }

    /// Turn one regex match into a date. `None` for impossible dates.
    fn extract(self, caps: &Captures<'_>) -> Option<NaiveDate> {
        let (year, month, day) = match self {
            DatePattern::Iso => (
                caps[1].parse().ok()?,
                caps[2].parse().ok()?,
                caps[3].parse().ok()?,
            ),
            DatePattern::MonthDayYear | DatePattern::WeekdayMonthDayYear => (
                caps[3].parse().ok()?,
                month_number(&caps[1])?,
                caps[2].parse().ok()?,
            ),
            DatePattern::DayMonthYear => (
                caps[3].parse().ok()?,
                month_number(&caps[2])?,
                caps[1].parse().ok()?,
            ),
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Every valid date this pattern finds in a single line.
    fn scan_line(self, line: &str) -> impl Iterator<Item = NaiveDate> + '_ {
        self.regex()
            .captures_iter(line)
            .filter_map(move |caps| {
                let date = self.extract(&caps);
                if date.is_none() {
                    tracing::debug!("Ignoring invalid date '{}'", &caps[0]);
                }
                date
            })
    }
}

/// Month number from a month name, matched on its first three letters.
fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun",
        "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
}

pub struct DateExtractor {
    patterns: Vec<DatePattern>,
}

impl DateExtractor {
    /// An extractor using every recognised pattern
    pub fn new() -> Self {
        Self::with_patterns(DatePattern::ALL.to_vec())
    }

    pub fn with_patterns(patterns: Vec<DatePattern>) -> Self {
        Self { patterns }
    }

    /// All valid dates in the text, line by line, pattern by pattern.
    /// The same date may appear more than once.
    pub fn extract(&self, text: &str) -> Vec<NaiveDate> {
        text.lines()
            .flat_map(|line| {
                self.patterns
                    .iter()
                    .flat_map(move |pattern| pattern.scan_line(line))
            })
            .collect()
    }

    /// Newest date across the general-information and summary sections.
    /// This is the date a document is ranked and filtered by.
    pub fn representative_date(&self, doc: &RcaDocument) -> Option<NaiveDate> {
        DATE_SECTIONS
            .iter()
            .flat_map(|name| self.extract(doc.section(name)))
            .max()
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}
