use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use etfwatch_etf_reports::{AcquisitionOutcome, CandidatePeriod, DataSource, FundRecord};
use serde::Serialize;

use crate::main_lib::AppState;

/// Publication month of the served records.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDate {
    pub month: String,
    pub year: i32,
    pub month_name: String,
}

impl From<&CandidatePeriod> for DataDate {
    fn from(period: &CandidatePeriod) -> Self {
        Self {
            month: period.month_abbrev.clone(),
            year: period.year,
            month_name: period.month_name().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub etfs: Vec<FundRecord>,
    pub data_date: Option<DataDate>,
    pub source: DataSource,
    pub captured_at: DateTime<Utc>,
}

impl From<AcquisitionOutcome> for ReportResponse {
    fn from(outcome: AcquisitionOutcome) -> Self {
        Self {
            data_date: outcome.period.as_ref().map(DataDate::from),
            etfs: outcome.records,
            source: outcome.source,
            captured_at: outcome.captured_at,
        }
    }
}

async fn list_etfs(State(state): State<Arc<AppState>>) -> Json<Vec<FundRecord>> {
    tracing::info!("Received request for ETF data");
    let records = state.acquisition.acquire_latest().await;
    tracing::info!("Serving {} ETFs", records.len());
    Json(records)
}

async fn get_report(State(state): State<Arc<AppState>>) -> Json<ReportResponse> {
    let outcome = state.acquisition.acquire().await;
    tracing::info!(
        "Serving {} ETFs from {} ({})",
        outcome.records.len(),
        outcome.source,
        outcome.diagnostics.summary()
    );
    Json(outcome.into())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/etfs", get(list_etfs))
        .route("/etfs/report", get(get_report))
}
