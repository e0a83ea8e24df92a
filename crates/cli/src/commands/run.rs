//! Run the reconciliation batch once for one reporting date.
//!
//! Wires the configured sources, sink, and reporter into the engine
//! and executes a single pass over the game catalog.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use clap::Args;
use revbatch_ad_reports::{AdReportClient, AdReportClientConfig};
use revbatch_core::{AppConfig, ReconcileEngine};
use revbatch_data::{DatabaseClient, RevenueRepository};
use revbatch_fx_rates::{FxClient, FxClientConfig};
use revbatch_kpi_client::KpiClient;
use revbatch_notify::WebhookReporter;
use std::sync::Arc;
use tracing::info;

/// Arguments for the run command.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Reporting date (YYYY-MM-DD); defaults to yesterday
    #[arg(long)]
    pub date: Option<String>,
}

/// Executes one reconciliation run.
///
/// # Errors
/// Returns an error on invalid arguments, configuration without games,
/// database connection failure, or an unavailable currency rate. Every
/// per-game failure is absorbed into the run summary instead.
pub async fn run_batch(config: AppConfig, args: RunArgs) -> Result<()> {
    let date = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid --date {raw:?}, expected YYYY-MM-DD"))?,
        None => (Utc::now() - Duration::days(1)).date_naive(),
    };

    anyhow::ensure!(
        !config.games.is_empty(),
        "no games configured; add [[games]] entries to the config file"
    );

    let db = DatabaseClient::new(&config.database.url, config.database.max_connections)
        .await
        .context("unable to connect to database")?;
    db.migrate().await.context("failed to apply migrations")?;

    let engine = ReconcileEngine::new(
        Arc::new(FxClient::new(FxClientConfig {
            api_url: config.fx.api_url.clone(),
            api_key: config.fx.api_key.clone(),
            currency: config.fx.currency.clone(),
        })),
        Arc::new(KpiClient::new(config.kpi.api_url.clone())),
        Arc::new(AdReportClient::new(AdReportClientConfig {
            base_url: config.ad_reports.base_url.clone(),
            api_token: config.ad_reports.api_token.clone(),
            revenue_column: config.ad_reports.revenue_column,
        })),
        Arc::new(RevenueRepository::new(db.pool())),
        Arc::new(WebhookReporter::new(config.notify.webhook_url.clone())),
        config.games,
    );

    let summary = engine.run(date).await?;
    info!(
        date = %summary.date,
        processed = summary.processed.len(),
        skipped = summary.skipped.len(),
        persisted = summary.persisted,
        "batch complete"
    );

    Ok(())
}
