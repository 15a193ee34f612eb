//! Markets sub-client — current snapshot and snapshot polling.

use crate::client::DashboardClient;
use crate::domain::market::AssetQuote;
use crate::error::{HttpError, SdkError};

use futures_util::stream::Stream;
use std::pin::Pin;
use std::time::Duration;

/// Maximum number of assets in a snapshot.
pub const SNAPSHOT_SIZE: usize = 20;

/// Sub-client for market snapshot operations.
pub struct Markets<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Markets<'a> {
    /// Fetch the top assets by market cap. Single attempt, no retry.
    ///
    /// Every failure collapses into [`SdkError::MarketData`]; the cause is
    /// logged and kept as the error source.
    pub async fn snapshot(&self) -> Result<Vec<AssetQuote>, SdkError> {
        match self.fetch_quotes().await {
            Ok(quotes) => {
                tracing::debug!(count = quotes.len(), "Fetched market snapshot");
                Ok(quotes)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching market snapshot");
                Err(SdkError::MarketData(e))
            }
        }
    }

    /// Poll [`snapshot`](Self::snapshot) on the client's configured interval.
    pub fn watch(self) -> Pin<Box<dyn Stream<Item = Result<Vec<AssetQuote>, SdkError>> + Send + 'a>> {
        let interval = self.client.poll_interval;
        self.watch_every(interval)
    }

    /// Poll [`snapshot`](Self::snapshot) every `interval`.
    ///
    /// The first snapshot is fetched immediately. The next fetch starts only
    /// after the previous one has finished and `interval` has elapsed, so two
    /// polls are never in flight at once. Failures are yielded, not fatal.
    pub fn watch_every(
        self,
        interval: Duration,
    ) -> Pin<Box<dyn Stream<Item = Result<Vec<AssetQuote>, SdkError>> + Send + 'a>> {
        Box::pin(async_stream::stream! {
            loop {
                yield self.snapshot().await;
                futures_timer::Delay::new(interval).await;
            }
        })
    }

    async fn fetch_quotes(&self) -> Result<Vec<AssetQuote>, HttpError> {
        let rows = self.client.http.get_markets(SNAPSHOT_SIZE as u32).await?;
        rows.into_iter()
            .take(SNAPSHOT_SIZE)
            .map(|row| {
                AssetQuote::try_from(row).map_err(|e| HttpError::Decode(e.to_string()))
            })
            .collect()
    }
}
