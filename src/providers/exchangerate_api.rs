use anyhow::{Result, bail};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::core::config::DEFAULT_EXCHANGERATE_API_URL;
use crate::core::currency::{CurrencyRateProvider, RateTable};
use crate::core::http::HttpClient;
use crate::providers::http::ReqwestHttpClient;

pub const FETCH_FAILED: &str = "Failed to fetch exchange rate";

/// Client for the exchangerate-api.com `v4/latest` endpoint.
///
/// Every call issues exactly one request. Nothing is cached between calls, so
/// concurrent callers never observe each other.
pub struct ExchangeRateClient<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    http: C,
}

impl ExchangeRateClient<ReqwestHttpClient> {
    /// Client for the public endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_EXCHANGERATE_API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self::with_http_client(base_url, ReqwestHttpClient::new()?))
    }
}

impl<C: HttpClient> ExchangeRateClient<C> {
    pub fn with_http_client(base_url: &str, http: C) -> Self {
        ExchangeRateClient {
            base_url: base_url.to_string(),
            http,
        }
    }

    /// `from` is interpolated as-is, without validation or escaping.
    pub fn rates_url(&self, from: &str) -> String {
        format!("{}/v4/latest/{}", self.base_url, from)
    }

    /// Fetches every rate the service reports for `from`.
    #[instrument(name = "RateTableFetch", skip(self), fields(from = %from))]
    pub async fn fetch_rate_table(&self, from: &str) -> Result<RateTable> {
        let url = self.rates_url(from);
        debug!("Requesting exchange rates from {}", url);

        let response = self.http.get(&url).await?;
        if !response.is_success() {
            debug!(status = response.status, "Exchange rate request failed");
            bail!(FETCH_FAILED);
        }

        let table: RateTable = serde_json::from_str(&response.body)?;
        Ok(table)
    }

    /// Rate of `to` per one unit of `from`. `Ok(None)` when the service
    /// answered but did not report `to`.
    pub async fn fetch_exchange_rate(&self, from: &str, to: &str) -> Result<Option<f64>> {
        let table = self.fetch_rate_table(from).await?;
        let rate = table.rate(to);
        if rate.is_none() {
            debug!(from, to, "Target currency missing from response");
        }
        Ok(rate)
    }
}

#[async_trait]
impl<C: HttpClient> CurrencyRateProvider for ExchangeRateClient<C> {
    async fn get_rate(&self, from: &str, to: &str) -> Result<Option<f64>> {
        self.fetch_exchange_rate(from, to).await
    }
}
