//! Spreadsheet parsing.
//!
//! Decoding turns bytes into a [`Workbook`]; [`extract_rows`] turns the fund
//! sheet into header-keyed [`RawRow`]s; [`HeaderWhitelist`] maps those onto
//! canonical [`FundField`](crate::models::FundField) keys.

mod headers;
mod sheet;
mod workbook;

pub use headers::{normalize_header, HeaderWhitelist, NormalizedRow};
pub use sheet::{extract_rows, RawRow, DEFAULT_HEADER_SKIP_ROWS};
pub use workbook::{CalamineDecoder, Sheet, SpreadsheetDecoder, Workbook};

/// Label of the fund sheet in the monthly report.
pub const DEFAULT_SHEET_NAME: &str = "Spotlight ETP List";
