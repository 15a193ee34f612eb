//! Retry policies for HTTP requests.

use crate::error::HttpError;
use std::time::Duration;

/// Default retry budget for rate-limited requests (not counting the first attempt).
pub const MAX_RETRIES: u32 = 3;

/// Fixed pause between rate-limited attempts.
pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries — the market snapshot and the recorder POST.
    #[default]
    None,
    /// Retry on 429 using the client's configured [`RetryConfig`].
    /// Used for price history.
    RateLimited,
    /// Caller-provided retry logic.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
///
/// The defaults give a fixed 1s pause, three retries, and retry only on 429.
/// `backoff_factor` and `jitter` exist for callers that want to deviate.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add ±25% jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::rate_limited()
    }
}

impl RetryConfig {
    /// Fixed-delay retry on HTTP 429 only.
    pub fn rate_limited() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            initial_delay: RETRY_DELAY,
            max_delay: RETRY_DELAY,
            backoff_factor: 1.0,
            jitter: false,
            retryable_statuses: vec![429],
        }
    }

    /// Same config with a different retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Same config with a fixed delay between attempts.
    pub fn with_fixed_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self.max_delay = delay;
        self.backoff_factor = 1.0;
        self
    }

    /// Whether `error` is one this config retries on.
    pub fn should_retry(&self, error: &HttpError) -> bool {
        error
            .status()
            .is_some_and(|status| self.retryable_statuses.contains(&status))
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}
