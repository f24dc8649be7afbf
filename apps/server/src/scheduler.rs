//! Background scheduler for the periodic report refresh.
//!
//! Re-runs the acquisition ladder on a fixed interval so the snapshot is
//! replaced soon after a new month is published.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};

use crate::config::Config;
use crate::main_lib::AppState;
use etfwatch_etf_reports::DataSource;

/// Starts the background refresh scheduler.
pub fn start_refresh_scheduler(state: Arc<AppState>, config: &Config) {
    let period = config.refresh_interval.max(Duration::from_secs(1));
    let refresh_on_start = config.refresh_on_start;

    tokio::spawn(async move {
        info!("Report refresh scheduler started ({}s interval)", period.as_secs());

        // First tick is immediate, subsequent ticks are one period apart
        let mut refresh_interval = interval(period);
        refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        if !refresh_on_start {
            refresh_interval.tick().await;
        }

        loop {
            refresh_interval.tick().await;
            run_scheduled_refresh(&state).await;
        }
    });
}

/// Runs a single scheduled refresh.
pub async fn run_scheduled_refresh(state: &AppState) -> DataSource {
    info!("Running scheduled report refresh...");

    if state.acquisition.check_freshness_hint().await {
        info!("Previous month's report is published");
    }

    let outcome = state.acquisition.acquire().await;
    match outcome.source {
        DataSource::Live => info!(
            "Scheduled refresh completed: {} ETFs from the live report",
            outcome.records.len()
        ),
        source => warn!(
            "Scheduled refresh fell back to {} data ({})",
            source,
            outcome.diagnostics.summary()
        ),
    }
    outcome.source
}
