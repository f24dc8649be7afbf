//! Acquisition entry points.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};

use crate::cache::SnapshotStore;
use crate::models::{CandidatePeriod, FundRecord};
use crate::parser::{CalamineDecoder, SpreadsheetDecoder};
use crate::provider::{HttpReportFetcher, ReportFetcher};
use crate::resolver::PeriodResolver;

use super::config::AcquisitionConfig;
use super::diagnostics::{AcquisitionDiagnostics, DataSource};
use super::tiers::{builtin_data, BuiltinTier, CacheTier, DataTier, LiveTier, TierData};

/// Result of one acquisition.
#[derive(Clone, Debug)]
pub struct AcquisitionOutcome {
    pub records: Vec<FundRecord>,
    pub source: DataSource,
    /// Publication period of the records, when known
    pub period: Option<CandidatePeriod>,
    pub captured_at: DateTime<Utc>,
    pub diagnostics: AcquisitionDiagnostics,
}

/// Runs the live -> cache -> built-in ladder.
///
/// The service holds no mutable state; share it behind an `Arc` and call it
/// from any number of tasks.
pub struct AcquisitionService {
    tiers: Vec<Arc<dyn DataTier>>,
    fetcher: Arc<dyn ReportFetcher>,
    resolver: PeriodResolver,
    today: Option<NaiveDate>,
}

impl AcquisitionService {
    /// Standard ladder over the given collaborators.
    pub fn new(
        fetcher: Arc<dyn ReportFetcher>,
        decoder: Arc<dyn SpreadsheetDecoder>,
        store: Arc<dyn SnapshotStore>,
        config: &AcquisitionConfig,
    ) -> Self {
        let tiers: Vec<Arc<dyn DataTier>> = vec![
            Arc::new(LiveTier::new(fetcher.clone(), decoder, store.clone(), config)),
            Arc::new(CacheTier::new(store)),
            Arc::new(BuiltinTier),
        ];
        Self::with_tiers(tiers, fetcher, config.resolver())
    }

    /// Standard ladder with the HTTP fetcher and calamine decoder.
    pub fn from_config(config: &AcquisitionConfig, store: Arc<dyn SnapshotStore>) -> Self {
        let fetcher = Arc::new(HttpReportFetcher::with_timeout(config.http_timeout));
        Self::new(fetcher, Arc::new(CalamineDecoder), store, config)
    }

    /// Custom ladder. `fetcher` and `resolver` serve the freshness probe.
    pub fn with_tiers(
        tiers: Vec<Arc<dyn DataTier>>,
        fetcher: Arc<dyn ReportFetcher>,
        resolver: PeriodResolver,
    ) -> Self {
        Self {
            tiers,
            fetcher,
            resolver,
            today: None,
        }
    }

    /// Pin the calendar day candidates are computed from.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Run the ladder and report where the records came from.
    ///
    /// Never fails: if every configured tier errors, the built-in dataset is used.
    pub async fn acquire(&self) -> AcquisitionOutcome {
        let today = self.today();
        let mut diagnostics = AcquisitionDiagnostics::new();

        for tier in &self.tiers {
            let source = tier.source();
            match tier.load(today, &mut diagnostics).await {
                Ok(data) => {
                    diagnostics.record_tier_success(source);
                    info!(
                        "Acquired {} records from {} tier ({})",
                        data.records.len(),
                        source,
                        diagnostics.summary()
                    );
                    return outcome(data, source, diagnostics);
                }
                Err(e) => {
                    warn!("{} tier failed: {}, falling back", source, e);
                    diagnostics.record_tier_error(source, e.to_string());
                }
            }
        }

        warn!("All tiers failed ({}), using built-in dataset", diagnostics.summary());
        diagnostics.record_tier_success(DataSource::Builtin);
        outcome(builtin_data(), DataSource::Builtin, diagnostics)
    }

    /// The best available record set.
    pub async fn acquire_latest(&self) -> Vec<FundRecord> {
        self.acquire().await.records
    }

    /// Whether the previous month's report is published.
    ///
    /// A metadata-only probe; never fails and has no side effects.
    pub async fn check_freshness_hint(&self) -> bool {
        let candidate = self.resolver.previous_month(self.today());
        let available = self.fetcher.exists(&candidate.url).await;
        info!(
            "Report for {} {} {}",
            candidate.period.month_name(),
            candidate.period.year,
            if available { "is available" } else { "is not yet available" }
        );
        available
    }
}

fn outcome(
    data: TierData,
    source: DataSource,
    diagnostics: AcquisitionDiagnostics,
) -> AcquisitionOutcome {
    AcquisitionOutcome {
        records: data.records,
        source,
        period: data.period,
        captured_at: data.captured_at,
        diagnostics,
    }
}
