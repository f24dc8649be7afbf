//! Acquisition settings.

use std::time::Duration;

use crate::parser::{HeaderWhitelist, DEFAULT_HEADER_SKIP_ROWS, DEFAULT_SHEET_NAME};
use crate::provider::DEFAULT_REQUEST_TIMEOUT;
use crate::resolver::{PeriodResolver, ReportUrlTemplate, DEFAULT_LOOKBACK_MONTHS};
use crate::transform::{FundRowValidator, ValidatorConfig, DEFAULT_NOT_APPLICABLE_MARKER};

/// Settings for one acquisition pipeline.
///
/// Defaults match the monthly ASX Investment Products report.
#[derive(Clone, Debug)]
pub struct AcquisitionConfig {
    /// Where candidate reports live.
    pub template: ReportUrlTemplate,
    /// How many elapsed months to probe, most recent first.
    pub lookback_months: u32,
    /// Label of the fund sheet (matched trimmed, ignoring case).
    pub sheet_name: String,
    /// Title rows above the header row.
    pub header_skip_rows: usize,
    /// Accepted header spellings for the fund sheet.
    pub whitelist: HeaderWhitelist,
    /// AUM text meaning "not applicable".
    pub not_applicable_marker: String,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            template: ReportUrlTemplate::default(),
            lookback_months: DEFAULT_LOOKBACK_MONTHS,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            header_skip_rows: DEFAULT_HEADER_SKIP_ROWS,
            whitelist: HeaderWhitelist::default(),
            not_applicable_marker: DEFAULT_NOT_APPLICABLE_MARKER.to_string(),
            http_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AcquisitionConfig {
    pub fn resolver(&self) -> PeriodResolver {
        PeriodResolver::new(self.template.clone(), self.lookback_months)
    }

    pub fn validator(&self) -> FundRowValidator {
        FundRowValidator::with_config(ValidatorConfig {
            not_applicable_marker: self.not_applicable_marker.clone(),
            ..Default::default()
        })
    }

    pub fn whitelist(&self) -> HeaderWhitelist {
        self.whitelist.clone()
    }
}
