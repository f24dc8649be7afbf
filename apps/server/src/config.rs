use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use etfwatch_etf_reports::{AcquisitionConfig, ReportUrlTemplate, DEFAULT_SNAPSHOT_FILE};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub snapshot_path: PathBuf,
    pub cors_allow: Vec<String>,
    pub acquisition: AcquisitionConfig,
    pub refresh_interval: Duration,
    pub refresh_on_start: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = env_or("ETFW_LISTEN_ADDR", "0.0.0.0:3001")
            .parse()
            .context("Invalid ETFW_LISTEN_ADDR")?;
        let data_dir = PathBuf::from(env_or("ETFW_DATA_DIR", "./data"));
        let snapshot_path = std::env::var("ETFW_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join(DEFAULT_SNAPSHOT_FILE));
        let cors_allow = env_or("ETFW_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let mut acquisition = AcquisitionConfig::default();
        if let Ok(base_url) = std::env::var("ETFW_REPORT_BASE_URL") {
            acquisition.template = ReportUrlTemplate::with_base_url(base_url);
        }
        acquisition.lookback_months =
            env_parse("ETFW_LOOKBACK_MONTHS", acquisition.lookback_months)?;
        acquisition.http_timeout = Duration::from_secs(env_parse(
            "ETFW_HTTP_TIMEOUT_SECS",
            acquisition.http_timeout.as_secs(),
        )?);

        let refresh_interval =
            Duration::from_secs(env_parse("ETFW_REFRESH_INTERVAL_SECS", 24 * 60 * 60)?);
        let refresh_on_start = env_parse("ETFW_REFRESH_ON_START", true)?;

        Ok(Self {
            listen_addr,
            snapshot_path,
            cors_allow,
            acquisition,
            refresh_interval,
            refresh_on_start,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}
