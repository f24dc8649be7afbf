//! Attempt tracking for acquisition diagnostics.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::models::CandidatePeriod;

/// Which rung of the ladder produced the records.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Freshly fetched and parsed report.
    Live,
    /// Last persisted snapshot.
    Cache,
    /// Built-in dataset.
    Builtin,
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Live => "live",
            Self::Cache => "cache",
            Self::Builtin => "builtin",
        };
        f.write_str(label)
    }
}

/// Record of one candidate month fetched by the live tier.
#[derive(Clone, Debug)]
pub struct PeriodAttempt {
    pub period: CandidatePeriod,
    pub url: String,
    pub error: Option<String>,
    pub success: bool,
}

/// Record of one tier tried during an acquisition.
#[derive(Clone, Debug)]
pub struct TierAttempt {
    pub source: DataSource,
    pub error: Option<String>,
    pub success: bool,
}

/// Everything tried during one acquisition, in order.
#[derive(Clone, Debug, Default)]
pub struct AcquisitionDiagnostics {
    pub periods: Vec<PeriodAttempt>,
    pub tiers: Vec<TierAttempt>,
}

impl AcquisitionDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_period_error(&mut self, period: CandidatePeriod, url: String, error: String) {
        self.periods.push(PeriodAttempt {
            period,
            url,
            error: Some(error),
            success: false,
        });
    }

    pub fn record_period_success(&mut self, period: CandidatePeriod, url: String) {
        self.periods.push(PeriodAttempt {
            period,
            url,
            error: None,
            success: true,
        });
    }

    pub fn record_tier_error(&mut self, source: DataSource, error: String) {
        self.tiers.push(TierAttempt {
            source,
            error: Some(error),
            success: false,
        });
    }

    pub fn record_tier_success(&mut self, source: DataSource) {
        self.tiers.push(TierAttempt {
            source,
            error: None,
            success: true,
        });
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        self.tiers
            .iter()
            .map(|a| match (&a.error, a.success) {
                (_, true) => format!("{}: SUCCESS", a.source),
                (Some(err), false) => format!("{}: ERROR ({})", a.source, err),
                (None, false) => format!("{}: UNKNOWN", a.source),
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// The tier that produced data, if any.
    pub fn successful_tier(&self) -> Option<DataSource> {
        self.tiers.iter().find(|a| a.success).map(|a| a.source)
    }

    /// Candidate months that could not be fetched.
    pub fn period_errors(&self) -> Vec<(&CandidatePeriod, &str)> {
        self.periods
            .iter()
            .filter_map(|a| a.error.as_ref().map(|e| (&a.period, e.as_str())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_summary() {
        let mut diag = AcquisitionDiagnostics::new();
        diag.record_tier_error(
            DataSource::Live,
            "No report found in the last 4 periods".to_string(),
        );
        diag.record_tier_error(DataSource::Cache, "Snapshot cache is empty".to_string());
        diag.record_tier_success(DataSource::Builtin);

        let summary = diag.summary();
        assert!(summary.contains("live: ERROR"));
        assert!(summary.contains("cache: ERROR"));
        assert!(summary.ends_with("builtin: SUCCESS"));
        assert_eq!(diag.successful_tier(), Some(DataSource::Builtin));
    }

    #[test]
    fn test_period_errors() {
        let mut diag = AcquisitionDiagnostics::new();
        diag.record_period_error(
            CandidatePeriod::new(2025, 9),
            "https://example.test/sep".to_string(),
            "HTTP 404".to_string(),
        );
        diag.record_period_success(
            CandidatePeriod::new(2025, 8),
            "https://example.test/aug".to_string(),
        );

        let errors = diag.period_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0.url_suffix, "sep-2025-abs");
    }

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(serde_json::to_value(DataSource::Cache).unwrap(), "cache");
    }
}
