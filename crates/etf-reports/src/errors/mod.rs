//! Error types and retry classification for the ETF report pipeline.
//!
//! This module provides:
//! - [`EtfDataError`]: The main error enum for every pipeline stage
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while acquiring an ETF report.
///
/// Each variant is classified into a [`RetryClass`] via the [`retry_class`](Self::retry_class)
/// method, which determines whether the live tier tries an older period.
#[derive(Error, Debug)]
pub enum EtfDataError {
    /// The publisher answered with a non-success status (usually 404).
    /// The report for this period has not been published yet.
    #[error("Report not found: {url} (HTTP {status})")]
    NotFound {
        /// The candidate URL that was requested
        url: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The request never produced a response (DNS, TLS, connection reset, body read).
    #[error("Report unreachable: {url} - {message}")]
    Unreachable {
        /// The candidate URL that was requested
        url: String,
        /// The transport error message
        message: String,
    },

    /// The request exceeded the configured client timeout.
    #[error("Timeout fetching report: {url}")]
    Timeout {
        /// The candidate URL that was requested
        url: String,
    },

    /// Every candidate period was tried and none could be fetched.
    #[error("No report found in the last {attempts} periods")]
    NoPublicationFound {
        /// Number of candidate periods attempted
        attempts: u32,
    },

    /// The workbook was fetched but does not contain the fund sheet.
    #[error("Sheet \"{sheet}\" not found in report")]
    SheetNotFound {
        /// The expected sheet label
        sheet: String,
    },

    /// The fetched bytes could not be decoded as a spreadsheet.
    #[error("Failed to decode report: {message}")]
    Decode {
        /// Description of the decoding failure
        message: String,
    },

    /// No snapshot has ever been saved.
    #[error("Snapshot cache is empty")]
    CacheEmpty,

    /// Reading or writing the snapshot file failed.
    #[error("Snapshot cache I/O failed: {0}")]
    CacheIo(#[from] std::io::Error),

    /// The snapshot file exists but is not a valid snapshot document.
    #[error("Snapshot cache is corrupt: {0}")]
    CacheFormat(#[from] serde_json::Error),
}

impl EtfDataError {
    /// Returns the retry classification for this error.
    ///
    /// - [`RetryClass::NextPeriod`]: try the next older candidate period
    /// - [`RetryClass::Never`]: abandon this tier
    ///
    /// # Examples
    ///
    /// ```
    /// use etfwatch_etf_reports::errors::{EtfDataError, RetryClass};
    ///
    /// let error = EtfDataError::NotFound {
    ///     url: "https://example.test/a.xlsx".to_string(),
    ///     status: 404,
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::NextPeriod);
    ///
    /// let error = EtfDataError::SheetNotFound { sheet: "Spotlight ETP List".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // Transport misses - the period may simply not be published yet
            Self::NotFound { .. } | Self::Unreachable { .. } | Self::Timeout { .. } => {
                RetryClass::NextPeriod
            }

            // Structural defects and exhausted windows
            Self::NoPublicationFound { .. } | Self::SheetNotFound { .. } | Self::Decode { .. } => {
                RetryClass::Never
            }

            Self::CacheEmpty | Self::CacheIo(_) | Self::CacheFormat(_) => RetryClass::Never,
        }
    }

    /// Whether this error is a structural defect of an otherwise-fetched file.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::SheetNotFound { .. } | Self::Decode { .. })
    }
}
