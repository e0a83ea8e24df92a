use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub kpi: KpiConfig,
    pub ad_reports: AdReportsConfig,
    pub fx: FxConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    /// Catalog of games to reconcile, in run order.
    #[serde(default)]
    pub games: Vec<GameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiConfig {
    pub api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdReportsConfig {
    pub base_url: String,
    pub api_token: String,
    /// Zero-based index of the revenue column in the partner report.
    pub revenue_column: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxConfig {
    pub api_url: String,
    pub api_key: String,
    /// ISO code of the local currency the USD rate is quoted against.
    pub currency: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Run-outcome webhook. Notification is skipped when unset.
    pub webhook_url: Option<String>,
}

/// Per-game reconciliation settings.
///
/// `platform_ids` is the ordered list of ad-network report identifiers
/// for the game: index 0 is the iOS store, every later index is an
/// Android-type store and folds into the Android ad bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    pub platform_ids: Vec<String>,
    /// When set, the game's Android ad samples arrive already in local
    /// currency and the USD amount is derived by division instead.
    #[serde(default)]
    pub local_currency_ads: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "postgresql://localhost/revbatch".to_string(),
                max_connections: 10,
            },
            kpi: KpiConfig {
                api_url: "http://localhost:8080/kpi/daily".to_string(),
            },
            ad_reports: AdReportsConfig {
                base_url: "https://hq1.appsflyer.com/aggreports/enc".to_string(),
                api_token: String::new(),
                revenue_column: 11,
            },
            fx: FxConfig {
                api_url: "https://api.currencyfreaks.com/latest".to_string(),
                api_key: String::new(),
                currency: "KRW".to_string(),
            },
            notify: NotifyConfig::default(),
            games: Vec::new(),
        }
    }
}
