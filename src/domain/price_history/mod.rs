//! Price history domain — chart points, timeframe queries, series summaries.

pub mod client;
pub mod summary;
pub mod wire;

use crate::domain::market::convert::to_decimal;
use crate::domain::market::ValidationError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use summary::SeriesSummary;

/// A single point on a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    /// USD price.
    pub price: Decimal,
}

impl PricePoint {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }
}

impl TryFrom<(f64, f64)> for PricePoint {
    type Error = ValidationError;

    fn try_from((timestamp, price): (f64, f64)) -> Result<Self, Self::Error> {
        if !timestamp.is_finite() {
            return Err(ValidationError::InvalidNumber {
                field: "timestamp",
                value: timestamp,
            });
        }
        Ok(Self {
            timestamp: timestamp as i64,
            price: to_decimal("price", price)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_point_from_pair() {
        let point = PricePoint::try_from((1_700_000_000_000.0, 37_250.5)).unwrap();
        assert_eq!(point.timestamp, 1_700_000_000_000);
        assert_eq!(point.price, Decimal::new(372505, 1));
        assert_eq!(point.time().unwrap().year(), 2023);
    }

    #[test]
    fn test_chart_body_keeps_order() {
        let body: wire::MarketChartResponse =
            serde_json::from_str(r#"{"prices": [[2000, 51], [1000, 50]]}"#).unwrap();
        let points: Vec<PricePoint> = body
            .prices
            .into_iter()
            .map(PricePoint::try_from)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(points[0].timestamp, 2000);
        assert_eq!(points[1].timestamp, 1000);
    }

    #[test]
    fn test_non_finite_timestamp_is_rejected() {
        assert!(PricePoint::try_from((f64::NAN, 1.0)).is_err());
    }
}
