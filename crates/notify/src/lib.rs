//! Run-outcome notification for the daily revenue batch.
//!
//! Delivery is strictly best-effort: the run's result never depends on
//! whether the notification went out.

use async_trait::async_trait;
use reqwest::Client;
use revbatch_core::models::RunSummary;
use revbatch_core::traits::RunReporter;
use tracing::{info, warn};

/// Posts the run summary as JSON to a configured webhook.
///
/// With no URL configured the reporter is a no-op, which keeps local
/// and CI runs quiet without a separate code path in the engine.
pub struct WebhookReporter {
    http_client: Client,
    webhook_url: Option<String>,
}

impl WebhookReporter {
    #[must_use]
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl RunReporter for WebhookReporter {
    async fn notify_run_outcome(&self, summary: &RunSummary) {
        let Some(url) = &self.webhook_url else {
            return;
        };

        let result = self.http_client.post(url).json(summary).send().await;
        match result {
            Ok(response) if response.status().is_success() => {
                info!(date = %summary.date, "run summary delivered");
            }
            Ok(response) => {
                warn!(status = %response.status(), "run summary rejected by webhook");
            }
            Err(e) => {
                warn!("failed to deliver run summary: {e}");
            }
        }
    }
}
