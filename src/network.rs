//! Network URL and timing constants for the dashboard SDK.

use std::time::Duration;

/// Default public price API base URL (CoinGecko v3).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default companion store base URL used by the price recorder.
pub const DEFAULT_COMPANION_URL: &str = "http://localhost:3000/api";

/// Default per-request timeout applied to the underlying HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default interval between snapshot polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);
