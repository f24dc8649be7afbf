//! Period resolution for the monthly report.
//!
//! The publisher rotates the report's file name every month and offers no
//! discovery endpoint, so the live tier has to guess which file exists.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      PeriodResolver                          │
//! │                                                              │
//! │  today ──▶ period_months_back(today, i)   i = 1..=lookback   │
//! │                     │                                        │
//! │                     ▼                                        │
//! │           CandidatePeriod { abbrev, year, url_suffix }       │
//! │                     │                                        │
//! │                     ▼                                        │
//! │           ReportUrlTemplate::url_for ──▶ ReportCandidate     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Candidates are ordered most recent first; the live tier stops at the
//! first one that can be fetched.

mod candidates;
mod period;
mod template;

pub use candidates::{PeriodResolver, ReportCandidate, DEFAULT_LOOKBACK_MONTHS};
pub use period::period_months_back;
pub use template::{
    ReportUrlTemplate, DEFAULT_BASE_URL, DEFAULT_FILE_PREFIX, DEFAULT_REPORT_PATH,
};
