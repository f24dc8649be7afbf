//! ETF Watch Report Crate
//!
//! This crate acquires monthly ETF statistics from the publisher's rotating
//! spreadsheet report and turns them into validated fund records.
//!
//! # Overview
//!
//! The report crate supports:
//! - Locating the newest published report by probing elapsed months
//! - Decoding xlsx workbooks and reading the fund sheet by header
//! - Header normalization onto canonical fields
//! - Row validation (name and AUM gates) with numeric coercion
//! - A persisted snapshot of the last good acquisition
//! - A live -> cache -> built-in degradation ladder that never fails
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  PeriodResolver  | --> | ReportCandidate  |  (month + URL)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ReportFetcher   |  (HTTP, newest first)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Workbook      |  (calamine)
//!                          +------------------+
//!                                  |
//!                                  v
//!                         +-------------------+
//!                         | HeaderWhitelist   |  (canonical fields)
//!                         +-------------------+
//!                                  |
//!                                  v
//!                         +-------------------+
//!                         | FundRowValidator  |  (name + AUM gates)
//!                         +-------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   FundRecord     |  (+ Snapshot saved)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`FundRecord`] - Canonical fund output
//! - [`Snapshot`] - The persisted record set
//! - [`CandidatePeriod`] - One hypothesized publication month
//! - [`AcquisitionService`] - Entry points (`acquire`, `acquire_latest`, `check_freshness_hint`)
//! - [`EtfDataError`] - Pipeline errors with retry classification

pub mod acquisition;
pub mod cache;
pub mod errors;
pub mod models;
pub mod parser;
pub mod provider;
pub mod resolver;
pub mod transform;

// Re-export all public types from models
pub use models::{CandidatePeriod, CellValue, FundField, FundRecord, Performance, Snapshot};

pub use errors::{EtfDataError, RetryClass};

pub use acquisition::{
    builtin_records, AcquisitionConfig, AcquisitionDiagnostics, AcquisitionOutcome,
    AcquisitionService, BuiltinTier, CacheTier, DataSource, DataTier, LiveTier, TierData,
};

pub use cache::{FileSnapshotStore, InMemorySnapshotStore, SnapshotStore, DEFAULT_SNAPSHOT_FILE};

pub use parser::{
    CalamineDecoder, HeaderWhitelist, NormalizedRow, RawRow, Sheet, SpreadsheetDecoder, Workbook,
};

pub use provider::{HttpReportFetcher, ReportFetcher};

pub use resolver::{PeriodResolver, ReportCandidate, ReportUrlTemplate};

pub use transform::{FundRowValidator, RejectReason, ValidationReport};
