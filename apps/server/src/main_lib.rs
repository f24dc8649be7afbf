use std::sync::Arc;

use anyhow::Context;
use etfwatch_etf_reports::{AcquisitionService, FileSnapshotStore, SnapshotStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub acquisition: Arc<AcquisitionService>,
}

impl AppState {
    pub fn new(acquisition: Arc<AcquisitionService>) -> Self {
        Self { acquisition }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("ETFW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if let Some(dir) = config.snapshot_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        }
    }

    let store = Arc::new(FileSnapshotStore::new(config.snapshot_path.clone()));
    tracing::info!("Snapshot path in use: {}", store.path().display());
    match store.load() {
        Ok(snapshot) => tracing::info!(
            "Found snapshot captured at {} ({} records)",
            snapshot.captured_at,
            snapshot.records.len()
        ),
        Err(e) => tracing::info!("No usable snapshot yet: {}", e),
    }

    let acquisition = Arc::new(AcquisitionService::from_config(&config.acquisition, store));
    Ok(Arc::new(AppState::new(acquisition)))
}
