//! Multi-source revenue reconciliation engine.
//!
//! For each configured game the engine pulls one KPI snapshot and one
//! ad-revenue series per platform identifier, applies the currency
//! rules, and emits one [`RevenueRecord`]. One game's data problems
//! never abort the run: only the currency rate fetch is fatal.

use crate::config::GameConfig;
use crate::models::{GameOutcome, KpiSnapshot, RunSummary, SkipReason, SkippedGame};
use crate::traits::{AdRevenueSource, KpiSource, RateSource, RecordSink, RunReporter};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct ReconcileEngine {
    rates: Arc<dyn RateSource>,
    kpi: Arc<dyn KpiSource>,
    ads: Arc<dyn AdRevenueSource>,
    sink: Arc<dyn RecordSink>,
    reporter: Arc<dyn RunReporter>,
    games: Vec<GameConfig>,
}

impl ReconcileEngine {
    pub fn new(
        rates: Arc<dyn RateSource>,
        kpi: Arc<dyn KpiSource>,
        ads: Arc<dyn AdRevenueSource>,
        sink: Arc<dyn RecordSink>,
        reporter: Arc<dyn RunReporter>,
        games: Vec<GameConfig>,
    ) -> Self {
        Self {
            rates,
            kpi,
            ads,
            sink,
            reporter,
            games,
        }
    }

    /// Runs the reconciliation once for `date` over the configured games.
    ///
    /// Fetches the currency rate (fatal on failure), reconciles each game
    /// in order, upserts every produced record, and delivers a best-effort
    /// run summary regardless of per-game skips.
    ///
    /// # Errors
    /// Returns an error only if the currency rate is unavailable; every
    /// per-game failure is isolated into the summary instead.
    pub async fn run(&self, date: NaiveDate) -> Result<RunSummary> {
        let started_at = Utc::now();

        let rate = self
            .rates
            .fetch_rate()
            .await
            .context("currency rate unavailable, aborting run")?;
        info!(rate, %date, games = self.games.len(), "starting reconciliation run");

        let mut processed = Vec::new();
        let mut skipped = Vec::new();
        let mut persisted = 0usize;
        let mut persistence_failures = 0usize;

        for game in &self.games {
            match self.reconcile(game, date, rate).await {
                GameOutcome::Processed(record) => {
                    processed.push(game.name.clone());
                    match self.sink.upsert(&record).await {
                        Ok(()) => persisted += 1,
                        Err(e) => {
                            persistence_failures += 1;
                            error!(game = %game.name, %date, "failed to persist record: {e:#}");
                        }
                    }
                }
                GameOutcome::Skipped { game, reason } => {
                    warn!(game = %game, %date, %reason, "skipping game");
                    skipped.push(SkippedGame {
                        game,
                        reason: reason.to_string(),
                    });
                }
            }
        }

        let ended_at = Utc::now();
        let summary = RunSummary {
            date,
            started_at,
            ended_at,
            elapsed_secs: (ended_at - started_at).num_milliseconds() as f64 / 1000.0,
            processed,
            skipped,
            persisted,
            persistence_failures,
        };
        info!(
            processed = summary.processed.len(),
            skipped = summary.skipped.len(),
            persisted = summary.persisted,
            "run finished in {:.1}s",
            summary.elapsed_secs
        );

        self.reporter.notify_run_outcome(&summary).await;

        Ok(summary)
    }

    /// Reconciles a single game for `date` at the given USD-to-local rate.
    ///
    /// Any fetch failure skips the game; an empty series contributes zero
    /// to its ad bucket without error.
    pub async fn reconcile(&self, game: &GameConfig, date: NaiveDate, rate: f64) -> GameOutcome {
        let snapshot = match self.kpi.fetch_snapshot(&game.name, date).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                return GameOutcome::Skipped {
                    game: game.name.clone(),
                    reason: SkipReason::KpiFetch {
                        cause: e.to_string(),
                    },
                }
            }
        };

        // Slot 0 is the iOS store; every later slot is an Android-type
        // store and folds into the single Android ad bucket.
        let mut ios_ad_sum = 0.0;
        let mut android_ad_sum = 0.0;
        for (slot, platform_id) in game.platform_ids.iter().enumerate() {
            match self.ads.fetch_platform_series(platform_id, date).await {
                Ok(series) => {
                    let sum: f64 = series.iter().sum();
                    if slot == 0 {
                        ios_ad_sum += sum;
                    } else {
                        android_ad_sum += sum;
                    }
                }
                Err(e) => {
                    return GameOutcome::Skipped {
                        game: game.name.clone(),
                        reason: SkipReason::AdFetch {
                            platform_id: platform_id.clone(),
                            cause: e.to_string(),
                        },
                    }
                }
            }
        }

        GameOutcome::Processed(build_record(
            game,
            date,
            rate,
            &snapshot,
            ios_ad_sum,
            android_ad_sum,
        ))
    }
}

/// Builds the dual-currency record from a snapshot and the two ad buckets.
///
/// In-app amounts and the iOS ad bucket are denominated in USD. The
/// Android ad bucket is USD too unless the game's `local_currency_ads`
/// flag is set, in which case the samples are already local currency and
/// the USD amount is derived by division.
fn build_record(
    game: &GameConfig,
    date: NaiveDate,
    rate: f64,
    snapshot: &KpiSnapshot,
    ios_ad_sum: f64,
    android_ad_sum: f64,
) -> crate::models::RevenueRecord {
    let inapp_ios_local = snapshot.sale_usd_ios * rate;
    let inapp_ios_usd = snapshot.sale_usd_ios;
    let inapp_android_local = snapshot.sale_usd_aos * rate;
    let inapp_android_usd = snapshot.sale_usd_aos;

    let ad_ios_local = ios_ad_sum * rate;
    let ad_ios_usd = ios_ad_sum;

    let (ad_android_local, ad_android_usd) = if game.local_currency_ads {
        (android_ad_sum, android_ad_sum / rate)
    } else {
        (android_ad_sum * rate, android_ad_sum)
    };

    crate::models::RevenueRecord {
        territory: game.name.clone(),
        game: game.name.clone(),
        date,
        dau: snapshot.dau,
        new_user_count: snapshot.new_user_count,
        currency_rate: rate,
        revenue_local_total: inapp_ios_local + inapp_android_local + ad_ios_local + ad_android_local,
        revenue_usd_total: inapp_ios_usd + inapp_android_usd + ad_ios_usd + ad_android_usd,
        inapp_ios_local,
        inapp_ios_usd,
        inapp_android_local,
        inapp_android_usd,
        ad_ios_local,
        ad_ios_usd,
        ad_android_local,
        ad_android_usd,
    }
}
