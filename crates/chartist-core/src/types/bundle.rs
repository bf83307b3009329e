//! Aligned derived-indicator container.

use serde::Serialize;

use super::TimeSeries;
use crate::error::DataError;

/// The set of derived series produced by the two indicator engines.
///
/// All six series share the input price series' timestamp domain, with
/// leading NaN entries where a rolling window has not yet filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBundle {
    /// Simple moving average (Bollinger middle band)
    pub sma: TimeSeries,
    /// Upper Bollinger band
    pub upper_band: TimeSeries,
    /// Lower Bollinger band
    pub lower_band: TimeSeries,
    /// MACD line (short EMA - long EMA)
    pub macd_line: TimeSeries,
    /// Signal line (EMA of the MACD line)
    pub signal_line: TimeSeries,
    /// MACD histogram (MACD line - signal line, zero-coerced)
    pub histogram: TimeSeries,
}

impl IndicatorBundle {
    /// Assemble a bundle, verifying every series shares the price domain.
    pub fn new(
        prices: &TimeSeries,
        sma: TimeSeries,
        upper_band: TimeSeries,
        lower_band: TimeSeries,
        macd_line: TimeSeries,
        signal_line: TimeSeries,
        histogram: TimeSeries,
    ) -> Result<Self, DataError> {
        for series in [
            &sma,
            &upper_band,
            &lower_band,
            &macd_line,
            &signal_line,
            &histogram,
        ] {
            if !prices.same_domain(series) {
                return Err(DataError::LengthMismatch {
                    expected: prices.len(),
                    actual: series.len(),
                });
            }
        }
        Ok(Self {
            sma,
            upper_band,
            lower_band,
            macd_line,
            signal_line,
            histogram,
        })
    }

    /// Number of points in the shared timestamp domain.
    pub fn len(&self) -> usize {
        self.sma.len()
    }

    /// Check if the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.sma.is_empty()
    }

    /// Index of the first point where every series is defined, if any.
    pub fn first_defined_index(&self) -> Option<usize> {
        (0..self.len()).find(|&i| {
            [
                &self.sma,
                &self.upper_band,
                &self.lower_band,
                &self.macd_line,
                &self.signal_line,
                &self.histogram,
            ]
            .iter()
            .all(|s| s.values()[i].is_finite())
        })
    }
}
