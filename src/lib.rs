pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::providers::ExchangeRateClient;
use anyhow::Result;
use tracing::{debug, info};

pub use crate::core::{CurrencyRateProvider, HttpClient, HttpResponse, RateTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Rate { from: String, to: String },
    Rates { from: String },
}

/// Rate of `to` per one unit of `from` from the public exchangerate-api
/// endpoint. `Ok(None)` when the response does not list `to`.
pub async fn fetch_exchange_rate(from: &str, to: &str) -> Result<Option<f64>> {
    ExchangeRateClient::new()?
        .fetch_exchange_rate(from, to)
        .await
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxrate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let client = ExchangeRateClient::with_base_url(config.exchangerate_api_base_url())?;

    match command {
        AppCommand::Rate { from, to } => cli::rate::run(&client, &from, &to).await,
        AppCommand::Rates { from } => cli::rates::run(&client, &from).await,
    }
}
