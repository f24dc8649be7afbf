//! Remote file naming convention.

use crate::models::CandidatePeriod;

/// Default publisher host.
pub const DEFAULT_BASE_URL: &str = "https://www.asx.com.au";

/// Default path to the yearly report folders.
pub const DEFAULT_REPORT_PATH: &str = "content/dam/asx/issuers/asx-investment-products-reports";

/// Default file-name prefix, followed by the period suffix.
pub const DEFAULT_FILE_PREFIX: &str = "asx-investment-products";

/// Renders `{base}/{report_path}/{year}/excel/{file_prefix}-{suffix}.xlsx`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportUrlTemplate {
    pub base_url: String,
    pub report_path: String,
    pub file_prefix: String,
}

impl Default for ReportUrlTemplate {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            report_path: DEFAULT_REPORT_PATH.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl ReportUrlTemplate {
    /// Default template with a different host (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Fully-qualified URL of the report for `period`.
    pub fn url_for(&self, period: &CandidatePeriod) -> String {
        format!(
            "{}/{}/{}/excel/{}-{}.xlsx",
            self.base_url.trim_end_matches('/'),
            self.report_path.trim_matches('/'),
            period.year,
            self.file_prefix,
            period.url_suffix
        )
    }
}
