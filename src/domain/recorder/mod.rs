//! Price recorder domain — best-effort writes to the companion store.

pub mod client;

use crate::domain::market::AssetQuote;
use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST {companion}/crypto/price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "coinId")]
    pub coin_id: AssetId,
    pub symbol: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<&AssetQuote> for PriceRecord {
    fn from(quote: &AssetQuote) -> Self {
        Self {
            coin_id: quote.id.clone(),
            symbol: quote.symbol.clone(),
            name: quote.name.clone(),
            price: quote.current_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_body_shape() {
        let record = PriceRecord {
            coin_id: AssetId::from("bitcoin"),
            symbol: "btc".into(),
            name: "Bitcoin".into(),
            price: Decimal::new(671235, 1),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "coinId": "bitcoin",
                "symbol": "btc",
                "name": "Bitcoin",
                "price": 67123.5
            })
        );
    }
}
