//! Acquisition orchestration.
//!
//! ```text
//! +-----------+  miss/defect  +-----------+  empty/corrupt  +-------------+
//! | LiveTier  | ------------> | CacheTier | --------------> | BuiltinTier |
//! +-----------+               +-----------+                 +-------------+
//!       |
//!       | months 1..=lookback, newest first, stop at first fetch
//!       v
//!  fetch -> decode -> sheet -> rows -> whitelist -> validate -> save snapshot
//! ```
//!
//! Transport misses move to the previous month; a fetched file that cannot
//! be parsed ends the live tier. Nothing escapes [`AcquisitionService::acquire`].

mod builtin;
mod config;
mod diagnostics;
mod service;
mod tiers;

pub use builtin::builtin_records;
pub use config::AcquisitionConfig;
pub use diagnostics::{AcquisitionDiagnostics, DataSource, PeriodAttempt, TierAttempt};
pub use service::{AcquisitionOutcome, AcquisitionService};
pub use tiers::{BuiltinTier, CacheTier, DataTier, LiveTier, TierData};
