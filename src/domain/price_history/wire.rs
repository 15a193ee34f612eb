//! Wire types for the market chart endpoint (REST).

use serde::{Deserialize, Serialize};

/// Body of `GET /coins/{id}/market_chart`.
///
/// Each entry is a `[timestamp_ms, price]` pair, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(f64, f64)>,
}
