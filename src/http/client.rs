//! Low-level HTTP client — `MarketHttp`.
//!
//! One method per upstream endpoint. Returns wire types (conversion to domain
//! types happens in the sub-clients). Internal to the SDK — the sub-clients
//! wrap this.

use crate::domain::market::wire::CoinMarketResponse;
use crate::domain::price_history::wire::MarketChartResponse;
use crate::domain::recorder::PriceRecord;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::TimeframeSpec;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Quote currency for every upstream request.
const VS_CURRENCY: &str = "usd";

/// Query parameters as sent on the wire.
pub type Query<'q> = [(&'q str, String)];

/// Low-level HTTP client for the price API and the companion store.
#[derive(Clone)]
pub struct MarketHttp {
    base_url: String,
    companion_url: String,
    client: Client,
    retry: RetryConfig,
}

impl MarketHttp {
    pub fn new(
        base_url: &str,
        companion_url: &str,
        timeout: Duration,
        retry: RetryConfig,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            companion_url: companion_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self, per_page: u32) -> Result<Vec<CoinMarketResponse>, HttpError> {
        let url = format!("{}/coins/markets", self.base_url);
        let query = [
            ("vs_currency", VS_CURRENCY.to_string()),
            ("order", "market_cap_desc".to_string()),
            ("per_page", per_page.to_string()),
            ("sparkline", "false".to_string()),
        ];
        self.get(&url, &query, RetryPolicy::None).await
    }

    // ── Price History ────────────────────────────────────────────────────

    pub async fn get_market_chart(
        &self,
        asset_id: &str,
        spec: TimeframeSpec,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = format!(
            "{}/coins/{}/market_chart",
            self.base_url,
            urlencoding::encode(asset_id)
        );
        let query = [
            ("vs_currency", VS_CURRENCY.to_string()),
            ("days", spec.days.to_string()),
            ("interval", spec.interval.as_str().to_string()),
        ];
        self.get(&url, &query, RetryPolicy::RateLimited).await
    }

    // ── Companion store ──────────────────────────────────────────────────

    /// POST a price record. Any 2xx is success; the response body is ignored.
    pub async fn post_price(&self, record: &PriceRecord) -> Result<(), HttpError> {
        let url = format!("{}/crypto/price", self.companion_url);
        self.send(reqwest::Method::POST, &url, &[], Some(record))
            .await
            .map(|_| ())
    }

    // ── Retrying fetch ───────────────────────────────────────────────────

    /// GET `url` with `query`, retrying rate-limited responses.
    ///
    /// Makes at most `retries_remaining + 1` attempts, pausing between them
    /// per the client's retry config. When the budget runs out on a 429, that
    /// final [`HttpError::RateLimited`] is returned as is. Other failures are
    /// returned immediately.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Query<'_>,
        retries_remaining: u32,
    ) -> Result<T, HttpError> {
        let config = self.retry.clone().with_max_retries(retries_remaining);
        self.get(url, query, RetryPolicy::Custom(config)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Query<'_>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => return self.do_request(url, query).await,
            RetryPolicy::RateLimited => self.retry.clone(),
            RetryPolicy::Custom(c) => c,
        };

        let mut attempt = 0;
        loop {
            match self.do_request::<T>(url, query).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < config.max_retries && config.should_retry(&e) => {
                    let delay = config.delay_for_attempt(attempt);
                    attempt += 1;
                    tracing::debug!(
                        attempt,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Query<'_>,
    ) -> Result<T, HttpError> {
        let resp = self
            .send(reqwest::Method::GET, url, query, None::<&()>)
            .await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| HttpError::Decode(e.to_string()))
    }

    async fn send<B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        query: &Query<'_>,
        body: Option<&B>,
    ) -> Result<Response, HttpError> {
        let mut req = self.client.request(method, url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .and_then(|secs| secs.checked_mul(1000));
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest {
                status: status_code,
                body: body_text,
            }),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
