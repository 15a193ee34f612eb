//! High-level client — `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared configuration, and accessor methods.

use crate::domain::market::client::Markets;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::domain::recorder::client::Recorder;
use crate::error::SdkError;
use crate::http::{MarketHttp, RetryConfig};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;
pub use crate::domain::recorder::client::Recorder as RecorderClient;

/// The primary entry point for the dashboard SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.price_history()`, `client.recorder()`.
/// Holds configuration only; no call shares state with another.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) http: MarketHttp,
    pub(crate) poll_interval: Duration,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn recorder(&self) -> Recorder<'_> {
        Recorder { client: self }
    }

    /// The low-level HTTP client, for direct use of the retrying fetcher.
    pub fn http(&self) -> &MarketHttp {
        &self.http
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    base_url: String,
    companion_url: String,
    timeout: Duration,
    retry: RetryConfig,
    poll_interval: Duration,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            companion_url: crate::network::DEFAULT_COMPANION_URL.to_string(),
            timeout: crate::network::DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
            poll_interval: crate::network::DEFAULT_POLL_INTERVAL,
        }
    }
}

impl DashboardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn companion_url(mut self, url: &str) -> Self {
        self.companion_url = url.to_string();
        self
    }

    /// Per-request timeout, including every retry attempt individually.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn build(self) -> Result<DashboardClient, SdkError> {
        Ok(DashboardClient {
            http: MarketHttp::new(&self.base_url, &self.companion_url, self.timeout, self.retry)?,
            poll_interval: self.poll_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = DashboardClient::builder().build().unwrap();
        assert_eq!(client.http().base_url(), "https://api.coingecko.com/api/v3");
        assert_eq!(client.poll_interval(), Duration::from_secs(30));
        assert_eq!(client.http().retry_config().max_retries, 3);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = DashboardClient::builder()
            .base_url("http://127.0.0.1:8080/api/v3/")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://127.0.0.1:8080/api/v3");
    }
}
