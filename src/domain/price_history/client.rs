//! Price history sub-client — per-asset chart series by timeframe.

use crate::client::DashboardClient;
use crate::domain::price_history::{PricePoint, SeriesSummary};
use crate::error::{HttpError, SdkError};
use crate::shared::Timeframe;

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Fetch the price series for `asset_id` over `timeframe`, oldest first.
    ///
    /// Rate-limited requests are retried with the client's retry config.
    /// Failures surface as [`SdkError::HistoricalData`], whose message tells
    /// a rate limit apart from any other failure.
    pub async fn get(
        &self,
        asset_id: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<PricePoint>, SdkError> {
        match self.fetch_points(asset_id, timeframe).await {
            Ok(points) => {
                tracing::debug!(
                    asset_id,
                    timeframe = timeframe.label(),
                    count = points.len(),
                    "Fetched price history"
                );
                Ok(points)
            }
            Err(e) => {
                tracing::warn!(
                    asset_id,
                    timeframe = timeframe.label(),
                    error = %e,
                    "Error fetching price history"
                );
                Err(SdkError::HistoricalData(e))
            }
        }
    }

    /// Same as [`get`](Self::get), taking a timeframe label such as `"1M"`.
    ///
    /// An unknown label fails with [`SdkError::UnknownTimeframe`] before any
    /// request is made.
    pub async fn get_by_label(
        &self,
        asset_id: &str,
        label: &str,
    ) -> Result<Vec<PricePoint>, SdkError> {
        let timeframe = Timeframe::from_label(label)?;
        self.get(asset_id, timeframe).await
    }

    /// Fetch a series and summarize it. `None` when the series is empty.
    pub async fn summary(
        &self,
        asset_id: &str,
        timeframe: Timeframe,
    ) -> Result<Option<SeriesSummary>, SdkError> {
        let points = self.get(asset_id, timeframe).await?;
        Ok(SeriesSummary::from_points(&points))
    }

    async fn fetch_points(
        &self,
        asset_id: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<PricePoint>, HttpError> {
        let chart = self
            .client
            .http
            .get_market_chart(asset_id, timeframe.spec())
            .await?;
        chart
            .prices
            .into_iter()
            .map(|pair| PricePoint::try_from(pair).map_err(|e| HttpError::Decode(e.to_string())))
            .collect()
    }
}
