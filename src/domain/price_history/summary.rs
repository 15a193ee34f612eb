//! Series summaries for the detail view's price card and high/low stats.

use super::PricePoint;
use rust_decimal::Decimal;

/// Aggregate figures over one fetched price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub first: PricePoint,
    pub last: PricePoint,
    pub high: PricePoint,
    pub low: PricePoint,
    /// `last.price - first.price`.
    pub change: Decimal,
    /// Change relative to the first price, in percent. `None` if the first price is zero.
    pub change_percent: Option<Decimal>,
}

impl SeriesSummary {
    /// Summarize a chronological series. Returns `None` for an empty series.
    pub fn from_points(points: &[PricePoint]) -> Option<Self> {
        let first = *points.first()?;
        let last = *points.last()?;
        let high = *points.iter().max_by_key(|p| p.price)?;
        let low = *points.iter().min_by_key(|p| p.price)?;

        let change = last.price - first.price;
        let change_percent = if first.price.is_zero() {
            None
        } else {
            Some(change / first.price * Decimal::ONE_HUNDRED)
        };

        Some(Self {
            first,
            last,
            high,
            low,
            change,
            change_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp: i64, price: i64) -> PricePoint {
        PricePoint {
            timestamp,
            price: Decimal::from(price),
        }
    }

    #[test]
    fn test_empty_series_has_no_summary() {
        assert_eq!(SeriesSummary::from_points(&[]), None);
    }

    #[test]
    fn test_summary_over_series() {
        let points = [point(1, 50), point(2, 55), point(3, 45), point(4, 51)];
        let summary = SeriesSummary::from_points(&points).unwrap();
        assert_eq!(summary.first.timestamp, 1);
        assert_eq!(summary.last.timestamp, 4);
        assert_eq!(summary.high, point(2, 55));
        assert_eq!(summary.low, point(3, 45));
        assert_eq!(summary.change, Decimal::from(1));
        assert_eq!(summary.change_percent, Some(Decimal::from(2)));
    }

    #[test]
    fn test_falling_series() {
        let points = [point(1, 200), point(2, 150)];
        let summary = SeriesSummary::from_points(&points).unwrap();
        assert_eq!(summary.change, Decimal::from(-50));
        assert_eq!(summary.change_percent, Some(Decimal::from(-25)));
    }

    #[test]
    fn test_zero_start_has_no_percent() {
        let points = [point(1, 0), point(2, 3)];
        let summary = SeriesSummary::from_points(&points).unwrap();
        assert_eq!(summary.change_percent, None);
    }
}
