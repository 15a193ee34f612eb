//! Recorder sub-client — fire-and-forget price writes.

use crate::client::DashboardClient;
use crate::domain::market::AssetQuote;
use crate::domain::recorder::PriceRecord;

/// Sub-client for the companion price store.
///
/// Nothing here returns an error: a failed write is logged and dropped.
pub struct Recorder<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Recorder<'a> {
    /// Record one quote. Returns whether the store accepted it.
    pub async fn record(&self, quote: &AssetQuote) -> bool {
        let record = PriceRecord::from(quote);
        match self.client.http.post_price(&record).await {
            Ok(()) => {
                tracing::debug!(coin_id = %record.coin_id, "Stored price");
                true
            }
            Err(e) => {
                tracing::warn!(coin_id = %record.coin_id, error = %e, "Error storing price");
                false
            }
        }
    }

    /// Record every quote in order. Returns how many were accepted.
    pub async fn record_all(&self, quotes: &[AssetQuote]) -> usize {
        let mut stored = 0;
        for quote in quotes {
            if self.record(quote).await {
                stored += 1;
            }
        }
        stored
    }
}
