//! Report fetcher trait definitions.

use async_trait::async_trait;

use crate::errors::EtfDataError;

/// Trait for retrieving report files from the publisher.
///
/// Implement this trait to read reports from a different transport
/// (a mirror, a local directory, an in-memory fixture).
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use etfwatch_etf_reports::provider::ReportFetcher;
///
/// struct DirectoryFetcher {
///     root: std::path::PathBuf,
/// }
///
/// #[async_trait]
/// impl ReportFetcher for DirectoryFetcher {
///     fn id(&self) -> &'static str {
///         "DIRECTORY"
///     }
///
///     // ... implement fetch and exists
/// }
/// ```
#[async_trait]
pub trait ReportFetcher: Send + Sync {
    /// Identifier used in logs and diagnostics.
    fn id(&self) -> &'static str;

    /// Retrieve the report body at `url`.
    ///
    /// # Returns
    ///
    /// The raw bytes on a success status. A non-success status is reported as
    /// [`EtfDataError::NotFound`]; a transport failure as
    /// [`EtfDataError::Unreachable`] or [`EtfDataError::Timeout`].
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, EtfDataError>;

    /// Metadata-only existence check.
    ///
    /// Returns `true` only when the publisher answers with a success status.
    /// Never fails: every error is reported as `false`.
    async fn exists(&self, url: &str) -> bool;
}
