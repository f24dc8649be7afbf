//! HTTP report fetcher backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::EtfDataError;
use crate::provider::ReportFetcher;

/// Fetcher ID constant
const FETCHER_ID: &str = "HTTP";

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("etfwatch/", env!("CARGO_PKG_VERSION"));

/// Fetches report files over HTTP(S).
///
/// # Example
///
/// ```ignore
/// use etfwatch_etf_reports::provider::HttpReportFetcher;
///
/// let fetcher = HttpReportFetcher::new();
/// let bytes = fetcher.fetch(&url).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpReportFetcher {
    client: Client,
}

impl HttpReportFetcher {
    /// Create a fetcher with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a fetcher whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for HttpReportFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn transport_error(url: &str, error: reqwest::Error) -> EtfDataError {
    if error.is_timeout() {
        EtfDataError::Timeout {
            url: url.to_string(),
        }
    } else {
        EtfDataError::Unreachable {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl ReportFetcher for HttpReportFetcher {
    fn id(&self) -> &'static str {
        FETCHER_ID
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, EtfDataError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EtfDataError::NotFound {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;

        Ok(body.to_vec())
    }

    async fn exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!("HEAD {} answered {}", url, status);
                status.is_success()
            }
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }
}
