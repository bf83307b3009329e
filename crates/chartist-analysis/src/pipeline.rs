//! Per-query analysis pipeline.
//!
//! One invocation processes one bounded, already-materialized close series:
//! fetch, run both indicator engines, join, generate signals. Recomputation
//! for a new date range is simply a fresh call; nothing is shared between
//! invocations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use chartist_core::error::{ChartError, DataError, IndicatorError};
use chartist_core::traits::{Indicator, PriceSource};
use chartist_core::types::{Analysis, IndicatorBundle, QualityNote, TimeSeries};
use chartist_indicators::{BollingerBands, BollingerSeries, Macd, MacdSeries};

use crate::signals::generate_signals;

/// Indicator parameters for one analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// MACD short EMA span
    pub macd_short: usize,
    /// MACD long EMA span
    pub macd_long: usize,
    /// MACD signal EMA span
    pub macd_signal: usize,
    /// Bollinger rolling window
    pub bollinger_window: usize,
    /// Bollinger deviation multiplier
    pub bollinger_num_std: f64,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            macd_short: 12,
            macd_long: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_num_std: 2.0,
        }
    }
}

/// The full per-query computation chain.
#[derive(Debug, Clone)]
pub struct Analyzer {
    macd: Macd,
    bollinger: BollingerBands,
}

impl Analyzer {
    /// Create an analyzer, validating every parameter up front.
    pub fn try_new(params: &AnalyzerParams) -> Result<Self, IndicatorError> {
        Ok(Self {
            macd: Macd::try_new(params.macd_short, params.macd_long, params.macd_signal)?,
            bollinger: BollingerBands::try_new(
                params.bollinger_window,
                params.bollinger_num_std,
            )?,
        })
    }

    /// Create an analyzer with the standard (12, 26, 9) / (20, 2.0) setup.
    pub fn standard() -> Self {
        Self {
            macd: Macd::standard(),
            bollinger: BollingerBands::standard(),
        }
    }

    /// Longest window any configured indicator needs.
    pub fn min_history(&self) -> usize {
        self.macd.min_history().max(self.bollinger.min_history())
    }

    /// Fetch a close series and analyze it.
    ///
    /// Rejects `start > end` with [`DataError::InvalidRange`] before any
    /// fetching or computation. Loader errors propagate unchanged. The two
    /// engines have no data dependency on each other and run side by side;
    /// signal generation joins on both.
    pub async fn analyze(
        &self,
        source: &dyn PriceSource,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Analysis, ChartError> {
        if start > end {
            return Err(DataError::InvalidRange { start, end }.into());
        }

        debug!(symbol, %start, %end, source = source.name(), "fetching daily closes");
        let prices = source.fetch_daily_close(symbol, start, end).await?;
        if prices.is_empty() {
            return Err(DataError::Unavailable.into());
        }

        let closes = prices.values().to_vec();
        let closes_for_bands = closes.clone();
        let macd = self.macd.clone();
        let bollinger = self.bollinger.clone();

        let (macd_out, band_out) = tokio::try_join!(
            tokio::task::spawn_blocking(move || macd.calculate(&closes)),
            tokio::task::spawn_blocking(move || bollinger.calculate(&closes_for_bands)),
        )
        .map_err(|e| ChartError::Internal(format!("indicator task failed: {e}")))?;

        self.assemble(symbol, prices, macd_out, band_out)
    }

    /// Analyze an already-materialized close series on the current thread.
    pub fn analyze_series(
        &self,
        symbol: &str,
        prices: TimeSeries,
    ) -> Result<Analysis, ChartError> {
        if prices.is_empty() {
            return Err(DataError::Unavailable.into());
        }

        let macd_out = self.macd.calculate(prices.values());
        let band_out = self.bollinger.calculate(prices.values());
        self.assemble(symbol, prices, macd_out, band_out)
    }

    fn assemble(
        &self,
        symbol: &str,
        prices: TimeSeries,
        macd_out: MacdSeries,
        band_out: BollingerSeries,
    ) -> Result<Analysis, ChartError> {
        let mut notes = Vec::new();
        let required = self.min_history();
        if prices.len() < required {
            warn!(
                required,
                available = prices.len(),
                "series shorter than the longest window; expect a large undefined prefix"
            );
            notes.push(QualityNote::InsufficientHistory {
                required,
                available: prices.len(),
            });
        }

        let indicators = IndicatorBundle::new(
            &prices,
            prices.with_values(band_out.sma)?,
            prices.with_values(band_out.upper)?,
            prices.with_values(band_out.lower)?,
            prices.with_values(macd_out.macd)?,
            prices.with_values(macd_out.signal)?,
            prices.with_values(macd_out.histogram)?,
        )?;

        let signals = generate_signals(&prices, &indicators)?;
        debug!(
            buys = signals.buys().len(),
            sells = signals.sells().len(),
            "signals generated"
        );

        Ok(Analysis {
            symbol: symbol.to_string(),
            prices,
            indicators,
            signals,
            notes,
        })
    }
}
