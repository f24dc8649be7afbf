use serde::{Deserialize, Serialize};

/// Lowercase month abbreviations used in the publisher's file names.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One hypothesized publication month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePeriod {
    /// Calendar month, 1-based
    pub month: u32,

    /// Three-letter lowercase abbreviation (e.g. "sep")
    pub month_abbrev: String,

    /// Four-digit year
    pub year: i32,

    /// File-name fragment, `{abbrev}-{year}-abs`
    pub url_suffix: String,
}

impl CandidatePeriod {
    /// Build the period for a calendar month.
    ///
    /// `month` is clamped into `1..=12`.
    pub fn new(year: i32, month: u32) -> Self {
        let month = month.clamp(1, 12);
        let month_abbrev = MONTH_ABBREVIATIONS[(month - 1) as usize].to_string();
        let url_suffix = format!("{}-{}-abs", month_abbrev, year);

        Self {
            month,
            month_abbrev,
            year,
            url_suffix,
        }
    }

    /// Full English month name (e.g. "September").
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }
}
