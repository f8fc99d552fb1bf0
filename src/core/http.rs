//! Transport abstraction used by rate providers

use anyhow::Result;
use async_trait::async_trait;

/// Status and full body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs a single GET and waits for the whole body.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}
