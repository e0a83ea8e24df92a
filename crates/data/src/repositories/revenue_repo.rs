//! Revenue record repository.
//!
//! One row per (game, date); re-running the batch for a date replaces
//! the prior row rather than duplicating it.

use anyhow::Result;
use async_trait::async_trait;
use revbatch_core::models::RevenueRecord;
use revbatch_core::traits::RecordSink;
use sqlx::PgPool;
use tracing::debug;

/// Repository for daily game revenue records.
#[derive(Debug, Clone)]
pub struct RevenueRepository {
    pool: PgPool,
}

impl RevenueRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upserts one record keyed by (game, date).
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn upsert_record(&self, record: &RevenueRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO game_revenue
                (territory, game, date, dau, new_user_count, currency_rate,
                 revenue_local_total, revenue_usd_total,
                 inapp_ios_local, inapp_ios_usd, inapp_android_local, inapp_android_usd,
                 ad_ios_local, ad_ios_usd, ad_android_local, ad_android_usd)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (game, date) DO UPDATE
            SET territory = EXCLUDED.territory,
                dau = EXCLUDED.dau,
                new_user_count = EXCLUDED.new_user_count,
                currency_rate = EXCLUDED.currency_rate,
                revenue_local_total = EXCLUDED.revenue_local_total,
                revenue_usd_total = EXCLUDED.revenue_usd_total,
                inapp_ios_local = EXCLUDED.inapp_ios_local,
                inapp_ios_usd = EXCLUDED.inapp_ios_usd,
                inapp_android_local = EXCLUDED.inapp_android_local,
                inapp_android_usd = EXCLUDED.inapp_android_usd,
                ad_ios_local = EXCLUDED.ad_ios_local,
                ad_ios_usd = EXCLUDED.ad_ios_usd,
                ad_android_local = EXCLUDED.ad_android_local,
                ad_android_usd = EXCLUDED.ad_android_usd,
                updated_at = now()
            "#,
        )
        .bind(&record.territory)
        .bind(&record.game)
        .bind(record.date)
        .bind(record.dau)
        .bind(record.new_user_count)
        .bind(record.currency_rate)
        .bind(record.revenue_local_total)
        .bind(record.revenue_usd_total)
        .bind(record.inapp_ios_local)
        .bind(record.inapp_ios_usd)
        .bind(record.inapp_android_local)
        .bind(record.inapp_android_usd)
        .bind(record.ad_ios_local)
        .bind(record.ad_ios_usd)
        .bind(record.ad_android_local)
        .bind(record.ad_android_usd)
        .execute(&self.pool)
        .await?;

        debug!(game = %record.game, date = %record.date, "upserted revenue record");
        Ok(())
    }
}

#[async_trait]
impl RecordSink for RevenueRepository {
    async fn upsert(&self, record: &RevenueRecord) -> Result<()> {
        self.upsert_record(record).await
    }
}
