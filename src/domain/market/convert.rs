//! Conversion: CoinMarketResponse → AssetQuote (TryFrom + validation).

use super::wire::CoinMarketResponse;
use super::{AssetQuote, ValidationError};
use rust_decimal::Decimal;

pub(crate) fn to_decimal(field: &'static str, value: f64) -> Result<Decimal, ValidationError> {
    Decimal::try_from(value).map_err(|_| ValidationError::InvalidNumber { field, value })
}

fn to_decimal_opt(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<Decimal>, ValidationError> {
    value.map(|v| to_decimal(field, v)).transpose()
}

impl TryFrom<CoinMarketResponse> for AssetQuote {
    type Error = ValidationError;

    fn try_from(source: CoinMarketResponse) -> Result<Self, Self::Error> {
        if source.id.as_str().is_empty() {
            return Err(ValidationError::MissingId);
        }
        if source.symbol.is_empty() {
            return Err(ValidationError::MissingSymbol(source.id));
        }

        Ok(AssetQuote {
            current_price: to_decimal("current_price", source.current_price)?,
            price_change_percentage_24h: to_decimal_opt(
                "price_change_percentage_24h",
                source.price_change_percentage_24h,
            )?,
            market_cap: to_decimal_opt("market_cap", source.market_cap)?,
            high_24h: to_decimal_opt("high_24h", source.high_24h)?,
            low_24h: to_decimal_opt("low_24h", source.low_24h)?,
            total_volume: to_decimal_opt("total_volume", source.total_volume)?,
            market_cap_rank: source.market_cap_rank,
            image: source.image,
            id: source.id,
            name: source.name,
            symbol: source.symbol,
        })
    }
}
