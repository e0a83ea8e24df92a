//! Domain records produced and consumed by the reconciliation run.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One day's aggregate user and in-app sales metrics for one game, as
/// reported by the internal KPI service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    #[serde(default)]
    pub date: String,
    pub dau: i64,
    pub new_user_count: i64,
    #[serde(default)]
    pub sale_usd_sum: f64,
    pub sale_usd_ios: f64,
    pub sale_usd_aos: f64,
}

/// The canonical dual-currency revenue record for one (game, date).
///
/// `revenue_local_total` is the sum of the four `*_local` split fields
/// and `revenue_usd_total` the sum of the four `*_usd` split fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    /// Reporting territory; mirrors the game name in the current schema.
    pub territory: String,
    pub game: String,
    pub date: NaiveDate,
    pub dau: i64,
    pub new_user_count: i64,
    pub currency_rate: f64,
    pub revenue_local_total: f64,
    pub revenue_usd_total: f64,
    pub inapp_ios_local: f64,
    pub inapp_ios_usd: f64,
    pub inapp_android_local: f64,
    pub inapp_android_usd: f64,
    pub ad_ios_local: f64,
    pub ad_ios_usd: f64,
    pub ad_android_local: f64,
    pub ad_android_usd: f64,
}

/// Which stage of a game's reconciliation failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The KPI snapshot fetch or decode failed.
    KpiFetch { cause: String },
    /// An ad-report fetch failed for one platform identifier.
    AdFetch { platform_id: String, cause: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KpiFetch { cause } => write!(f, "kpi fetch failed: {cause}"),
            Self::AdFetch { platform_id, cause } => {
                write!(f, "ad report fetch failed for {platform_id}: {cause}")
            }
        }
    }
}

/// Outcome of reconciling one game: either a record to persist, or a
/// reasoned skip that leaves the rest of the run untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum GameOutcome {
    Processed(RevenueRecord),
    Skipped { game: String, reason: SkipReason },
}

impl GameOutcome {
    /// Returns the produced record, if any.
    #[must_use]
    pub fn record(&self) -> Option<&RevenueRecord> {
        match self {
            Self::Processed(record) => Some(record),
            Self::Skipped { .. } => None,
        }
    }
}

/// A game skipped during the run, for the summary payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedGame {
    pub game: String,
    pub reason: String,
}

/// Best-effort account of one run, handed to the run reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub date: NaiveDate,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub elapsed_secs: f64,
    pub processed: Vec<String>,
    pub skipped: Vec<SkippedGame>,
    pub persisted: usize,
    pub persistence_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_snapshot_decodes_service_payload() {
        let snapshot: KpiSnapshot = serde_json::from_str(
            r#"{
                "date": "2021-06-11",
                "dau": 15230,
                "new_user_count": 412,
                "sale_usd_sum": 153.2,
                "sale_usd_ios": 101.5,
                "sale_usd_aos": 51.7,
                "ios_total": [],
                "aos_total": []
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.dau, 15230);
        assert_eq!(snapshot.new_user_count, 412);
        assert!((snapshot.sale_usd_ios - 101.5).abs() < f64::EPSILON);
    }

    #[test]
    fn skip_reason_display_names_the_platform() {
        let reason = SkipReason::AdFetch {
            platform_id: "id954182728".to_string(),
            cause: "API error: 403 - forbidden".to_string(),
        };
        let text = reason.to_string();
        assert!(text.contains("id954182728"));
        assert!(text.contains("403"));
    }
}
