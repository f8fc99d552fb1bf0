//! Core abstractions shared by providers and the CLI

pub mod config;
pub mod currency;
pub mod http;
pub mod log;

// Re-export main types for cleaner imports
pub use currency::{CurrencyRateProvider, RateTable};
pub use http::{HttpClient, HttpResponse};
