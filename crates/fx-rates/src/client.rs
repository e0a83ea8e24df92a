//! Client for the currency quote API.
//!
//! The quote service returns the day's rates as decimal strings keyed
//! by currency code. One rate is fetched per run; any failure here is
//! fatal upstream, because no record can be converted without it.

use async_trait::async_trait;
use reqwest::Client;
use revbatch_core::error::{Result, SourceError};
use revbatch_core::traits::RateSource;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Configuration for the FX quote client.
#[derive(Debug, Clone)]
pub struct FxClientConfig {
    /// Full URL of the latest-rates endpoint.
    pub api_url: String,
    /// API key passed as the `apikey` query parameter.
    pub api_key: String,
    /// Currency code to extract from the response, e.g. `KRW`.
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, String>,
}

pub struct FxClient {
    http_client: Client,
    config: FxClientConfig,
}

impl FxClient {
    #[must_use]
    pub fn new(config: FxClientConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// Fetches today's USD-to-local rate as a float.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status,
    /// a response missing the configured currency, or a rate string
    /// that does not parse as a decimal number.
    pub async fn latest_rate(&self) -> Result<f64> {
        let response = self
            .http_client
            .get(&self.config.api_url)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::api(status.as_u16(), body));
        }

        let rates: RatesResponse = response.json().await?;
        let raw = rates.rates.get(&self.config.currency).ok_or_else(|| {
            SourceError::decode(format!("rate for {} missing from response", self.config.currency))
        })?;

        let rate: f64 = raw
            .parse()
            .map_err(|_| SourceError::MalformedRate(raw.clone()))?;
        debug!(currency = %self.config.currency, rate, "fetched currency rate");
        Ok(rate)
    }
}

#[async_trait]
impl RateSource for FxClient {
    async fn fetch_rate(&self) -> Result<f64> {
        self.latest_rate().await
    }
}
