//! Indicator engines for chart analysis.
//!
//! This crate provides the two overlay engines:
//! - Moving averages (aligned SMA, recursively-seeded EMA)
//! - MACD (line, signal line, histogram)
//! - Bollinger Bands (SMA plus/minus a rolling standard-deviation envelope)
//!
//! Every engine returns series of the same length as its input, with NaN
//! marking indices inside a rolling window's warm-up gap.

pub mod momentum;
pub mod moving_average;
pub mod volatility;

pub use momentum::{Macd, MacdSeries};
pub use moving_average::{Ema, Sma};
pub use volatility::{BollingerBands, BollingerSeries, StdDev};

/// Replace non-finite values with zero.
///
/// Fixed missing-value policy shared by both engines: undefined input prices
/// are coerced to zero before any indicator math. This favors numeric
/// stability over missing-data semantics; changing it would shift signal
/// timing, so it is a policy, not an error path.
pub fn zero_filled(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v.is_finite() { v } else { 0.0 })
        .collect()
}
