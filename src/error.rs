//! Unified SDK error types.

use thiserror::Error;

/// Message shown when the market snapshot cannot be fetched.
pub const MARKET_DATA_MESSAGE: &str = "Failed to fetch market data";

/// Message shown when price history is rate limited upstream.
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again in a moment.";

/// Message shown for every other price history failure.
pub const CONNECTION_MESSAGE: &str = "Failed to fetch crypto data. Please check your connection.";

/// Top-level SDK error.
///
/// The client-facing variants carry one coarse, display-ready message each.
/// The underlying [`HttpError`] stays reachable through `source()`.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("{}", MARKET_DATA_MESSAGE)]
    MarketData(#[source] HttpError),

    #[error("{}", history_message(.0))]
    HistoricalData(#[source] HttpError),

    #[error("Unknown timeframe: {0}")]
    UnknownTimeframe(String),
}

impl SdkError {
    /// Whether the upstream cause was an HTTP 429.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            SdkError::Http(e) | SdkError::MarketData(e) | SdkError::HistoricalData(e) => {
                e.is_rate_limited()
            }
            SdkError::UnknownTimeframe(_) => false,
        }
    }
}

fn history_message(cause: &HttpError) -> &'static str {
    if cause.is_rate_limited() {
        RATE_LIMITED_MESSAGE
    } else {
        CONNECTION_MESSAGE
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl HttpError {
    /// The HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ServerError { status, .. } | HttpError::BadRequest { status, .. } => {
                Some(*status)
            }
            HttpError::RateLimited { .. } => Some(429),
            HttpError::NotFound(_) => Some(404),
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::Timeout | HttpError::Decode(_) => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_market_data_message_hides_cause() {
        let err = SdkError::MarketData(HttpError::ServerError {
            status: 500,
            body: "boom".into(),
        });
        assert_eq!(err.to_string(), "Failed to fetch market data");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_history_message_rate_limited() {
        let err = SdkError::HistoricalData(HttpError::RateLimited {
            retry_after_ms: None,
        });
        assert_eq!(err.to_string(), RATE_LIMITED_MESSAGE);
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_history_message_other_causes() {
        for cause in [
            HttpError::Timeout,
            HttpError::NotFound("coin".into()),
            HttpError::ServerError {
                status: 503,
                body: String::new(),
            },
            HttpError::Decode("missing field `prices`".into()),
        ] {
            let err = SdkError::HistoricalData(cause);
            assert_eq!(
                err.to_string(),
                "Failed to fetch crypto data. Please check your connection."
            );
            assert!(!err.is_rate_limited());
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            HttpError::RateLimited {
                retry_after_ms: Some(1000)
            }
            .status(),
            Some(429)
        );
        assert_eq!(HttpError::NotFound(String::new()).status(), Some(404));
        assert_eq!(HttpError::Timeout.status(), None);
    }
}
