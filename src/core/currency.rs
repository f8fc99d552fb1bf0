//! Currency rate abstractions and core types

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rates reported by a provider for a single base currency.
///
/// Only `rates` is required when decoding. A `null` rate is indistinguishable
/// from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time_last_updated: Option<i64>,
    pub rates: HashMap<String, Option<f64>>,
}

impl RateTable {
    /// Units of `code` per one unit of the base currency, if reported.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied().flatten()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.time_last_updated
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// Reported rates sorted by currency code, skipping null entries.
    pub fn sorted_rates(&self) -> Vec<(&str, f64)> {
        let mut rates: Vec<(&str, f64)> = self
            .rates
            .iter()
            .filter_map(|(code, rate)| rate.map(|r| (code.as_str(), r)))
            .collect();
        rates.sort_by(|a, b| a.0.cmp(b.0));
        rates
    }
}

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    /// Returns `Ok(None)` when the provider answered but did not report `to`.
    async fn get_rate(&self, from: &str, to: &str) -> Result<Option<f64>>;
}
