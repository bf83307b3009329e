//! Read-through price caching.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::debug;

use chartist_core::error::DataError;
use chartist_core::traits::PriceSource;
use chartist_core::types::TimeSeries;

/// Cache key for one fetched range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RangeKey {
    symbol: String,
    start: NaiveDate,
    end: NaiveDate,
}

/// Read-through cache around any price source.
///
/// Keyed by (symbol, start, end). Population and invalidation live here on
/// the loader side; the analysis pipeline only ever sees a `PriceSource`.
pub struct CachedSource<S> {
    inner: S,
    cache: Mutex<HashMap<RangeKey, TimeSeries>>,
}

impl<S> CachedSource<S> {
    /// Wrap a source with an empty cache.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Drop every cached range.
    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }

    /// Number of cached ranges.
    pub async fn entries(&self) -> usize {
        self.cache.lock().await.len()
    }
}

#[async_trait]
impl<S: PriceSource> PriceSource for CachedSource<S> {
    async fn fetch_daily_close(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, DataError> {
        let key = RangeKey {
            symbol: symbol.to_string(),
            start,
            end,
        };

        if let Some(series) = self.cache.lock().await.get(&key) {
            debug!(symbol, %start, %end, "cache hit");
            return Ok(series.clone());
        }

        let series = self.inner.fetch_daily_close(symbol, start, end).await?;
        self.cache.lock().await.insert(key, series.clone());
        Ok(series)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
