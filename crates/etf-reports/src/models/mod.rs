//! ETF report models
//!
//! This module contains the core data types for the acquisition pipeline:
//! - `fund` - Canonical fund output (FundRecord, Performance)
//! - `field` - Canonical spreadsheet columns (FundField)
//! - `cell` - Untyped spreadsheet cell contents (CellValue)
//! - `period` - One hypothesized publication month (CandidatePeriod)
//! - `snapshot` - The cache-persisted unit (Snapshot)

mod cell;
mod field;
mod fund;
mod period;
mod snapshot;

pub use cell::CellValue;
pub use field::FundField;
pub use fund::{FundRecord, Performance};
pub use period::{CandidatePeriod, MONTH_ABBREVIATIONS};
pub use snapshot::Snapshot;
