//! # cryptodash SDK
//!
//! Data access for a cryptocurrency price dashboard: the top assets by market
//! cap, per-asset price history by timeframe, and best-effort price recording.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, the timeframe table, domain models, formatting
//! 2. **HTTP API** — `MarketHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `DashboardClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptodash_sdk::prelude::*;
//!
//! let client = DashboardClient::builder().build()?;
//!
//! let quotes = client.markets().snapshot().await?;
//! let week = client.price_history().get("bitcoin", Timeframe::OneWeek).await?;
//! client.recorder().record(&quotes[0]).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, the timeframe table and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and timing constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AssetId, Interval, Timeframe, TimeframeSpec};

    // Domain types
    pub use crate::domain::market::{AssetQuote, QuoteRow};
    pub use crate::domain::price_history::{PricePoint, SeriesSummary};
    pub use crate::domain::recorder::PriceRecord;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_COMPANION_URL, DEFAULT_POLL_INTERVAL};

    // HTTP client + sub-clients
    pub use crate::client::{
        DashboardClient, DashboardClientBuilder, MarketsClient, PriceHistorySubClient,
        RecorderClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy, MAX_RETRIES, RETRY_DELAY};
}
