//! Market domain — live asset quotes, validation, display projection.

pub mod client;
pub(crate) mod convert;
pub mod wire;

use crate::shared::fmt::decimal;
use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── AssetQuote ──────────────────────────────────────────────────────────────

/// Current price data for one asset, as of the snapshot that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetQuote {
    pub id: AssetId,
    pub name: String,
    /// Ticker as sent upstream (usually lowercase).
    pub symbol: String,
    /// USD price.
    pub current_price: Decimal,
    /// Signed 24h change in percent. `None` when upstream has no figure.
    pub price_change_percentage_24h: Option<Decimal>,
    pub image: Option<String>,
    pub market_cap: Option<Decimal>,
    pub market_cap_rank: Option<u32>,
    pub high_24h: Option<Decimal>,
    pub low_24h: Option<Decimal>,
    pub total_volume: Option<Decimal>,
}

impl AssetQuote {
    /// Project the quote into display strings for a list row.
    pub fn display_row(&self) -> QuoteRow {
        QuoteRow {
            id: self.id.clone(),
            name: self.name.clone(),
            symbol: self.symbol.to_uppercase(),
            price: decimal::price(&self.current_price),
            change: self
                .price_change_percentage_24h
                .as_ref()
                .map(decimal::percent)
                .unwrap_or_else(|| NO_CHANGE.to_string()),
            is_negative: self
                .price_change_percentage_24h
                .is_some_and(|c| c < Decimal::ZERO),
            market_cap: self.market_cap.as_ref().map(abbreviated),
            volume: self.total_volume.as_ref().map(abbreviated),
        }
    }
}

/// Shown in place of a missing 24h change.
pub const NO_CHANGE: &str = "—";

fn abbreviated(value: &Decimal) -> String {
    decimal::abbr_number(value, Some(1), None)
}

// ─── QuoteRow ────────────────────────────────────────────────────────────────

/// Display-ready projection of an [`AssetQuote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRow {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub is_negative: bool,
    /// Market cap with a K/M/B/T suffix, e.g. `1.3T`.
    pub market_cap: Option<String>,
    /// 24h volume with a K/M/B/T suffix, e.g. `1.2B`.
    pub volume: Option<String>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingId,
    MissingSymbol(AssetId),
    InvalidNumber { field: &'static str, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId => write!(f, "Missing asset id"),
            ValidationError::MissingSymbol(id) => write!(f, "Missing symbol for {id}"),
            ValidationError::InvalidNumber { field, value } => {
                write!(f, "Invalid number for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn quote(price: &str, change: Option<&str>) -> AssetQuote {
        AssetQuote {
            id: AssetId::from("bitcoin"),
            name: "Bitcoin".into(),
            symbol: "btc".into(),
            current_price: Decimal::from_str(price).unwrap(),
            price_change_percentage_24h: change.map(|c| Decimal::from_str(c).unwrap()),
            image: None,
            market_cap: None,
            market_cap_rank: Some(1),
            high_24h: None,
            low_24h: None,
            total_volume: None,
        }
    }

    #[test]
    fn test_display_row_formats_fields() {
        let row = quote("67123.456", Some("2.5")).display_row();
        assert_eq!(row.symbol, "BTC");
        assert_eq!(row.price, "67,123.46");
        assert_eq!(row.change, "2.50%");
        assert!(!row.is_negative);
    }

    #[test]
    fn test_display_row_negative_change() {
        let row = quote("0.5213", Some("-3.14159")).display_row();
        assert_eq!(row.price, "0.521");
        assert_eq!(row.change, "-3.14%");
        assert!(row.is_negative);
    }

    #[test]
    fn test_display_row_abbreviates_cap_and_volume() {
        let mut q = quote("67123.456", Some("2.5"));
        q.market_cap = Some(Decimal::from(1_320_000_000_000u64));
        q.total_volume = Some(Decimal::from(1_234_567_890u64));
        let row = q.display_row();
        assert_eq!(row.market_cap.as_deref(), Some("1.3T"));
        assert_eq!(row.volume.as_deref(), Some("1.2B"));
    }

    #[test]
    fn test_display_row_missing_change() {
        let row = quote("1", None).display_row();
        assert_eq!(row.change, NO_CHANGE);
        assert!(!row.is_negative);
        assert_eq!(row.market_cap, None);
        assert_eq!(row.volume, None);
    }
}
