pub mod exchangerate_api;
pub mod http;

pub use exchangerate_api::ExchangeRateClient;
pub use http::ReqwestHttpClient;
