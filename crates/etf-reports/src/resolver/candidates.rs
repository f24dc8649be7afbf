//! Ordered candidate list for the live tier.

use chrono::NaiveDate;

use crate::models::CandidatePeriod;

use super::period::period_months_back;
use super::template::ReportUrlTemplate;

/// Default number of elapsed months probed before giving up.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 4;

/// One resolved report location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportCandidate {
    /// How many months before the current month this candidate is
    pub months_back: u32,
    /// The publication period
    pub period: CandidatePeriod,
    /// Fully-qualified report URL
    pub url: String,
}

/// Resolves candidate report locations relative to a given day.
///
/// The current month is never a candidate: its report cannot exist until the
/// month has elapsed. Candidates run from the previous month backwards.
#[derive(Clone, Debug)]
pub struct PeriodResolver {
    template: ReportUrlTemplate,
    lookback_months: u32,
}

impl PeriodResolver {
    pub fn new(template: ReportUrlTemplate, lookback_months: u32) -> Self {
        Self {
            template,
            lookback_months,
        }
    }

    pub fn template(&self) -> &ReportUrlTemplate {
        &self.template
    }

    pub fn lookback_months(&self) -> u32 {
        self.lookback_months
    }

    /// The candidate `months_back` months before `today`'s month.
    pub fn resolve(&self, today: NaiveDate, months_back: u32) -> ReportCandidate {
        let period = period_months_back(&today, months_back);
        let url = self.template.url_for(&period);
        ReportCandidate {
            months_back,
            period,
            url,
        }
    }

    /// Candidates `1..=lookback_months`, most recent first.
    pub fn candidates(&self, today: NaiveDate) -> Vec<ReportCandidate> {
        (1..=self.lookback_months)
            .map(|months_back| self.resolve(today, months_back))
            .collect()
    }

    /// The previous calendar month, used by the freshness probe.
    pub fn previous_month(&self, today: NaiveDate) -> ReportCandidate {
        self.resolve(today, 1)
    }
}

impl Default for PeriodResolver {
    fn default() -> Self {
        Self::new(ReportUrlTemplate::default(), DEFAULT_LOOKBACK_MONTHS)
    }
}
