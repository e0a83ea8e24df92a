//! Client for per-platform ad-network partner reports.
//!
//! One CSV report is fetched per platform identifier per run. Fetch
//! failures (transport, non-success status) are recoverable errors
//! that skip the game upstream; a report that downloads but fails to
//! parse degrades to an empty series instead, because one broken
//! third-party report should not discard the game's remaining data.

use crate::extract::extract_column;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use revbatch_core::error::{Result, SourceError};
use revbatch_core::traits::AdRevenueSource;
use tracing::{debug, warn};

/// Configuration for the partner report client.
#[derive(Debug, Clone)]
pub struct AdReportClientConfig {
    /// Base URL up to (not including) the platform identifier segment.
    pub base_url: String,
    /// Report API token.
    pub api_token: String,
    /// Zero-based index of the revenue column in the report.
    pub revenue_column: usize,
}

pub struct AdReportClient {
    http_client: Client,
    config: AdReportClientConfig,
}

impl AdReportClient {
    #[must_use]
    pub fn new(config: AdReportClientConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// Downloads one platform's report for `date` and extracts the
    /// revenue column.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-success status.
    /// A body that fails CSV extraction is logged and yields an empty
    /// series, not an error.
    pub async fn platform_series(&self, platform_id: &str, date: NaiveDate) -> Result<Vec<f64>> {
        let day = date.format("%Y-%m-%d").to_string();
        let url = format!(
            "{}/{platform_id}/partners_report/v5",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_token", self.config.api_token.as_str()),
                ("from", day.as_str()),
                ("to", day.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::api(status.as_u16(), body));
        }

        let body = response.bytes().await?;
        match extract_column(&body, self.config.revenue_column) {
            Ok(samples) => {
                debug!(platform_id, samples = samples.len(), "extracted report series");
                Ok(samples)
            }
            Err(e) => {
                warn!(platform_id, %date, "unparseable partner report, using empty series: {e}");
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl AdRevenueSource for AdReportClient {
    async fn fetch_platform_series(&self, platform_id: &str, date: NaiveDate) -> Result<Vec<f64>> {
        self.platform_series(platform_id, date).await
    }
}
