use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fund::FundRecord;
use super::period::CandidatePeriod;

/// The cache-persisted unit: one full record set plus its capture time.
///
/// Snapshots are replaced wholesale, never merged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Every record from the acquisition that produced this snapshot
    pub records: Vec<FundRecord>,

    /// When the records were captured
    pub captured_at: DateTime<Utc>,

    /// Publication period the records were read from, when known
    #[serde(default)]
    pub period: Option<CandidatePeriod>,
}

impl Snapshot {
    /// Capture `records` now.
    pub fn capture(records: Vec<FundRecord>, period: Option<CandidatePeriod>) -> Self {
        Self {
            records,
            captured_at: Utc::now(),
            period,
        }
    }
}
