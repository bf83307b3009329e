//! Price source trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::DataError;
use crate::types::TimeSeries;

/// Trait for daily closing-price loaders.
///
/// The core depends on a loader only through this single call; fetching,
/// caching and invalidation are entirely the implementation's concern.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch daily closing prices for a symbol over an inclusive date range.
    ///
    /// # Errors
    /// * [`DataError::Unavailable`] when the provider has no data in range
    /// * [`DataError::InvalidRange`] when `start` is after `end`
    async fn fetch_daily_close(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
