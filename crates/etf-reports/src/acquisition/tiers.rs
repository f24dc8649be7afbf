//! The degradation ladder: live report, then snapshot, then built-in data.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info, warn};
use tokio::task;

use crate::cache::SnapshotStore;
use crate::errors::{EtfDataError, RetryClass};
use crate::models::{CandidatePeriod, FundRecord, Snapshot};
use crate::parser::{extract_rows, HeaderWhitelist, NormalizedRow, SpreadsheetDecoder};
use crate::provider::ReportFetcher;
use crate::resolver::{PeriodResolver, ReportCandidate};
use crate::transform::FundRowValidator;

use super::builtin::builtin_records;
use super::config::AcquisitionConfig;
use super::diagnostics::{AcquisitionDiagnostics, DataSource};

/// Records produced by one tier.
#[derive(Clone, Debug, PartialEq)]
pub struct TierData {
    pub records: Vec<FundRecord>,
    pub period: Option<CandidatePeriod>,
    pub captured_at: DateTime<Utc>,
}

impl From<Snapshot> for TierData {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            records: snapshot.records,
            period: snapshot.period,
            captured_at: snapshot.captured_at,
        }
    }
}

/// One rung of the ladder.
///
/// Tiers are tried in order; the first `Ok` ends the acquisition.
#[async_trait]
pub trait DataTier: Send + Sync {
    fn source(&self) -> DataSource;

    async fn load(
        &self,
        today: NaiveDate,
        diagnostics: &mut AcquisitionDiagnostics,
    ) -> Result<TierData, EtfDataError>;
}

/// Fetches and parses the newest published report, then replaces the snapshot.
///
/// Decoding and the snapshot write run on the blocking pool.
#[derive(Clone)]
pub struct LiveTier {
    fetcher: Arc<dyn ReportFetcher>,
    decoder: Arc<dyn SpreadsheetDecoder>,
    store: Arc<dyn SnapshotStore>,
    resolver: PeriodResolver,
    whitelist: HeaderWhitelist,
    validator: FundRowValidator,
    sheet_name: String,
    header_skip_rows: usize,
}

impl LiveTier {
    pub fn new(
        fetcher: Arc<dyn ReportFetcher>,
        decoder: Arc<dyn SpreadsheetDecoder>,
        store: Arc<dyn SnapshotStore>,
        config: &AcquisitionConfig,
    ) -> Self {
        Self {
            fetcher,
            decoder,
            store,
            resolver: config.resolver(),
            whitelist: config.whitelist(),
            validator: config.validator(),
            sheet_name: config.sheet_name.clone(),
            header_skip_rows: config.header_skip_rows,
        }
    }

    /// Decode a report and turn its fund sheet into validated records.
    pub fn parse_report(&self, bytes: &[u8]) -> Result<Vec<FundRecord>, EtfDataError> {
        let workbook = self.decoder.decode(bytes)?;
        let sheet = workbook.sheet(&self.sheet_name)?;

        let rows: Vec<NormalizedRow> = extract_rows(sheet, self.header_skip_rows)
            .iter()
            .map(|row| self.whitelist.normalize_row(row))
            .collect();

        let (records, report) = self.validator.validate_batch(&rows);
        info!(
            "Parsed sheet '{}' ({} rows): {}",
            sheet.name,
            rows.len(),
            report.summary()
        );
        Ok(records)
    }

    /// Fetch the most recent candidate that exists.
    async fn fetch_newest(
        &self,
        today: NaiveDate,
        diagnostics: &mut AcquisitionDiagnostics,
    ) -> Result<(ReportCandidate, Vec<u8>), EtfDataError> {
        let candidates = self.resolver.candidates(today);
        let attempts = candidates.len() as u32;

        for candidate in candidates {
            debug!(
                "Fetching report for {} via '{}': {}",
                candidate.period.url_suffix,
                self.fetcher.id(),
                candidate.url
            );

            match self.fetcher.fetch(&candidate.url).await {
                Ok(bytes) => {
                    info!(
                        "Fetched report for {} {} ({} bytes)",
                        candidate.period.month_name(),
                        candidate.period.year,
                        bytes.len()
                    );
                    diagnostics
                        .record_period_success(candidate.period.clone(), candidate.url.clone());
                    return Ok((candidate, bytes));
                }
                Err(e) => {
                    diagnostics.record_period_error(
                        candidate.period.clone(),
                        candidate.url.clone(),
                        e.to_string(),
                    );
                    match e.retry_class() {
                        RetryClass::NextPeriod => {
                            info!(
                                "No report for {}: {}, trying previous month",
                                candidate.period.url_suffix, e
                            );
                        }
                        RetryClass::Never => {
                            info!(
                                "Terminal error for {}: {}, not retrying",
                                candidate.period.url_suffix, e
                            );
                            return Err(e);
                        }
                    }
                }
            }
        }

        Err(EtfDataError::NoPublicationFound { attempts })
    }
}

#[async_trait]
impl DataTier for LiveTier {
    fn source(&self) -> DataSource {
        DataSource::Live
    }

    async fn load(
        &self,
        today: NaiveDate,
        diagnostics: &mut AcquisitionDiagnostics,
    ) -> Result<TierData, EtfDataError> {
        let (candidate, bytes) = self.fetch_newest(today, diagnostics).await?;

        let tier = self.clone();
        let snapshot = task::spawn_blocking(move || tier.parse_and_store(&bytes, candidate))
            .await
            .map_err(|e| EtfDataError::Decode {
                message: format!("report task failed: {}", e),
            })??;

        Ok(snapshot.into())
    }
}

impl LiveTier {
    fn parse_and_store(
        &self,
        bytes: &[u8],
        candidate: ReportCandidate,
    ) -> Result<Snapshot, EtfDataError> {
        let records = self.parse_report(bytes).map_err(|e| {
            if e.is_structural() {
                warn!(
                    "Report for {} is malformed, not trying older months: {}",
                    candidate.period.url_suffix, e
                );
            }
            e
        })?;

        let snapshot = Snapshot::capture(records, Some(candidate.period));
        if let Err(e) = self.store.save(&snapshot) {
            warn!(
                "Failed to save snapshot to '{}' store: {}, serving live records anyway",
                self.store.id(),
                e
            );
        }

        Ok(snapshot)
    }
}

/// Serves the last saved snapshot, however old.
pub struct CacheTier {
    store: Arc<dyn SnapshotStore>,
}

impl CacheTier {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DataTier for CacheTier {
    fn source(&self) -> DataSource {
        DataSource::Cache
    }

    async fn load(
        &self,
        _today: NaiveDate,
        _diagnostics: &mut AcquisitionDiagnostics,
    ) -> Result<TierData, EtfDataError> {
        let snapshot = self.store.load()?;
        info!(
            "Using cached snapshot from {} ({} records)",
            snapshot.captured_at,
            snapshot.records.len()
        );
        Ok(snapshot.into())
    }
}

/// Serves the built-in dataset. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinTier;

#[async_trait]
impl DataTier for BuiltinTier {
    fn source(&self) -> DataSource {
        DataSource::Builtin
    }

    async fn load(
        &self,
        _today: NaiveDate,
        _diagnostics: &mut AcquisitionDiagnostics,
    ) -> Result<TierData, EtfDataError> {
        info!("Using built-in dataset");
        Ok(builtin_data())
    }
}

pub(crate) fn builtin_data() -> TierData {
    TierData {
        records: builtin_records(),
        period: None,
        captured_at: Utc::now(),
    }
}
