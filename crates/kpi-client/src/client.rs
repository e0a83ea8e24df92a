//! Client for the internal KPI analytics service.
//!
//! The service takes a JSON date-range request and answers with an
//! array of daily snapshots; for this batch the range is a single day
//! and only the first element is used.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use revbatch_core::error::{Result, SourceError};
use revbatch_core::models::KpiSnapshot;
use revbatch_core::traits::KpiSource;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRequest<'a> {
    start_date: String,
    end_date: String,
    name: &'a str,
}

pub struct KpiClient {
    http_client: Client,
    api_url: String,
}

impl KpiClient {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: Client::new(),
            api_url,
        }
    }

    /// Fetches the snapshot for one game and one day.
    ///
    /// # Errors
    /// Transport failures, non-success statuses, an empty response
    /// array, and decode failures are all one recoverable condition;
    /// the engine skips the game on any of them.
    pub async fn daily_snapshot(&self, game: &str, date: NaiveDate) -> Result<KpiSnapshot> {
        let day = date.format("%Y-%m-%d").to_string();
        let request = SnapshotRequest {
            start_date: day.clone(),
            end_date: day,
            name: game,
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::api(status.as_u16(), body));
        }

        let mut snapshots: Vec<KpiSnapshot> = response.json().await?;
        if snapshots.is_empty() {
            return Err(SourceError::decode(format!(
                "KPI service returned no snapshot for {game}"
            )));
        }
        debug!(game, dau = snapshots[0].dau, "fetched KPI snapshot");
        Ok(snapshots.remove(0))
    }
}

#[async_trait]
impl KpiSource for KpiClient {
    async fn fetch_snapshot(&self, game: &str, date: NaiveDate) -> Result<KpiSnapshot> {
        self.daily_snapshot(game, date).await
    }
}
