//! MACD engine.

use serde::Serialize;

use chartist_core::error::IndicatorError;
use chartist_core::traits::Indicator;

use crate::moving_average::Ema;
use crate::zero_filled;

/// Aligned MACD output: three series, each the same length as the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdSeries {
    /// MACD line (short EMA - long EMA)
    pub macd: Vec<f64>,
    /// Signal line (EMA of the MACD line)
    pub signal: Vec<f64>,
    /// Histogram (MACD - signal, zero-coerced)
    pub histogram: Vec<f64>,
}

/// MACD (Moving Average Convergence Divergence) engine.
///
/// Derives short/long EMAs of the prices, their difference (the MACD line),
/// an EMA of that difference (the signal line), and the histogram between
/// the two. Since the EMAs are seeded from the first sample, every output
/// index is defined for any non-empty input; there is no failure mode for
/// short history.
#[derive(Debug, Clone)]
pub struct Macd {
    short: Ema,
    long: Ema,
    signal: Ema,
}

impl Macd {
    /// Create a MACD with the standard (12, 26, 9) windows.
    pub fn standard() -> Self {
        Self::try_new(12, 26, 9).expect("standard windows are valid")
    }

    /// Create a MACD with custom windows.
    ///
    /// Fails fast with [`IndicatorError::InvalidParameter`] before any
    /// computation when a window violates its precondition.
    pub fn try_new(
        short_window: usize,
        long_window: usize,
        signal_window: usize,
    ) -> Result<Self, IndicatorError> {
        if short_window >= long_window {
            return Err(IndicatorError::InvalidParameter(format!(
                "short window ({short_window}) must be less than long window ({long_window})"
            )));
        }
        Ok(Self {
            short: Ema::try_new(short_window)?,
            long: Ema::try_new(long_window)?,
            signal: Ema::try_new(signal_window)?,
        })
    }

    /// The short EMA span.
    pub fn short_window(&self) -> usize {
        self.short.span()
    }

    /// The long EMA span.
    pub fn long_window(&self) -> usize {
        self.long.span()
    }

    /// The signal EMA span.
    pub fn signal_window(&self) -> usize {
        self.signal.span()
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::standard()
    }
}

impl Indicator for Macd {
    type Output = MacdSeries;

    fn calculate(&self, data: &[f64]) -> MacdSeries {
        // Fixed policy: undefined prices become zero before the math.
        let prices = zero_filled(data);

        let ema_short = self.short.calculate(&prices);
        let ema_long = self.long.calculate(&prices);

        let macd: Vec<f64> = ema_short
            .iter()
            .zip(ema_long.iter())
            .map(|(s, l)| s - l)
            .collect();

        let signal = self.signal.calculate(&macd);

        // Anything still undefined here is coerced to zero as well, so the
        // histogram is always plottable and never excludes a timestamp.
        let histogram: Vec<f64> = macd
            .iter()
            .zip(signal.iter())
            .map(|(m, s)| {
                let h = m - s;
                if h.is_finite() {
                    h
                } else {
                    0.0
                }
            })
            .collect();

        MacdSeries {
            macd,
            signal,
            histogram,
        }
    }

    fn min_history(&self) -> usize {
        self.long.span()
    }

    fn name(&self) -> &str {
        "MACD"
    }
}
