use crate::error::Result;
use crate::models::{KpiSnapshot, RevenueRecord, RunSummary};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Supplies the single USD-to-local-currency rate for the run.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rate(&self) -> Result<f64>;
}

/// Supplies one KPI snapshot per (game, date).
#[async_trait]
pub trait KpiSource: Send + Sync {
    async fn fetch_snapshot(&self, game: &str, date: NaiveDate) -> Result<KpiSnapshot>;
}

/// Supplies the raw ad-revenue samples for one platform identifier.
#[async_trait]
pub trait AdRevenueSource: Send + Sync {
    async fn fetch_platform_series(&self, platform_id: &str, date: NaiveDate) -> Result<Vec<f64>>;
}

/// Persists revenue records keyed by (game, date); re-running a date
/// must replace the prior record, not duplicate it.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn upsert(&self, record: &RevenueRecord) -> anyhow::Result<()>;
}

/// Fire-and-forget notification of the run outcome. Implementations
/// must not let delivery failures escape.
#[async_trait]
pub trait RunReporter: Send + Sync {
    async fn notify_run_outcome(&self, summary: &RunSummary);
}
