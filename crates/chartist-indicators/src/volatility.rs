//! Bollinger Band engine and rolling deviation.

use serde::Serialize;

use chartist_core::error::IndicatorError;
use chartist_core::traits::Indicator;

use crate::moving_average::Sma;
use crate::zero_filled;

/// Rolling sample standard deviation, aligned to its input.
///
/// Uses the `n - 1` divisor. The first `window - 1` outputs are NaN.
#[derive(Debug, Clone)]
pub struct StdDev {
    window: usize,
}

impl StdDev {
    /// Create a new rolling standard deviation.
    pub fn try_new(window: usize) -> Result<Self, IndicatorError> {
        if window < 2 {
            return Err(IndicatorError::InvalidParameter(
                "standard deviation window must be at least 2".into(),
            ));
        }
        Ok(Self { window })
    }
}

impl Indicator for StdDev {
    type Output = Vec<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        let mut result = vec![f64::NAN; data.len()];
        if data.len() < self.window {
            return result;
        }

        let window_f64 = self.window as f64;
        for (i, window) in data.windows(self.window).enumerate() {
            let mean: f64 = window.iter().sum::<f64>() / window_f64;
            let variance: f64 =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (window_f64 - 1.0);
            result[i + self.window - 1] = variance.sqrt();
        }

        result
    }

    fn min_history(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "StdDev"
    }
}

/// Aligned Bollinger output: three series, each the same length as the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerSeries {
    /// Middle band (SMA)
    pub sma: Vec<f64>,
    /// Upper band (SMA + num_std * deviation)
    pub upper: Vec<f64>,
    /// Lower band (SMA - num_std * deviation)
    pub lower: Vec<f64>,
}

/// Bollinger Band engine.
///
/// A simple moving average with an envelope at a multiple of the rolling
/// sample standard deviation. The warm-up prefix (`window - 1` points)
/// stays NaN: a partial window never yields a band value. Unlike the MACD
/// histogram, the warm-up gap is deliberately NOT zero-coerced, so signal
/// evaluation skips those timestamps entirely.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    sma: Sma,
    std_dev: StdDev,
    num_std: f64,
}

impl BollingerBands {
    /// Create Bollinger Bands with the standard (20, 2.0) parameters.
    pub fn standard() -> Self {
        Self::try_new(20, 2.0).expect("standard parameters are valid")
    }

    /// Create Bollinger Bands with custom parameters.
    ///
    /// Fails fast with [`IndicatorError::InvalidParameter`] when
    /// `window < 2` or `num_std <= 0`.
    pub fn try_new(window: usize, num_std: f64) -> Result<Self, IndicatorError> {
        if window < 2 {
            return Err(IndicatorError::InvalidParameter(
                "Bollinger window must be at least 2".into(),
            ));
        }
        if !(num_std > 0.0) {
            return Err(IndicatorError::InvalidParameter(
                "Bollinger deviation multiplier must be positive".into(),
            ));
        }
        Ok(Self {
            sma: Sma::try_new(window)?,
            std_dev: StdDev::try_new(window)?,
            num_std,
        })
    }

    /// The rolling window length.
    pub fn window(&self) -> usize {
        self.sma.window()
    }

    /// The deviation multiplier.
    pub fn num_std(&self) -> f64 {
        self.num_std
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::standard()
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerSeries;

    fn calculate(&self, data: &[f64]) -> BollingerSeries {
        // Same missing-value policy as the MACD engine, so the two stay
        // aligned on which timestamps are defined.
        let prices = zero_filled(data);

        let sma = self.sma.calculate(&prices);
        let std_dev = self.std_dev.calculate(&prices);

        let mut upper = Vec::with_capacity(prices.len());
        let mut lower = Vec::with_capacity(prices.len());
        for (mean, dev) in sma.iter().zip(std_dev.iter()) {
            // NaN warm-up propagates through the arithmetic untouched
            upper.push(mean + self.num_std * dev);
            lower.push(mean - self.num_std * dev);
        }

        BollingerSeries { sma, upper, lower }
    }

    fn min_history(&self) -> usize {
        self.sma.window()
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_dev_sample_divisor() {
        let std_dev = StdDev::try_new(3).unwrap();
        let result = std_dev.calculate(&[2.0, 4.0, 6.0, 8.0, 10.0]);

        assert_eq!(result.len(), 5);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        // Window [2, 4, 6]: mean 4, sample variance (4+0+4)/2 = 4, std 2
        assert!((result[2] - 2.0).abs() < 1e-12);
        assert!((result[3] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_invalid_window() {
        assert!(StdDev::try_new(1).is_err());
    }

    #[test]
    fn test_warm_up_gap() {
        let bb = BollingerBands::standard();
        let data: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let out = bb.calculate(&data);

        assert_eq!(out.sma.len(), 25);
        for i in 0..19 {
            assert!(out.sma[i].is_nan(), "index {i} should be warm-up");
            assert!(out.upper[i].is_nan());
            assert!(out.lower[i].is_nan());
        }
        // Index 19 is the first defined value, from samples 0..=19 exactly:
        // mean of 100..=119 is 109.5
        assert!((out.sma[19] - 109.5).abs() < 1e-10);
        assert!(out.upper[19].is_finite());
        assert!(out.lower[19].is_finite());
    }

    #[test]
    fn test_constant_series_collapses_bands() {
        let bb = BollingerBands::standard();
        let data = vec![7.0; 30];
        let out = bb.calculate(&data);

        for i in 19..30 {
            assert!((out.sma[i] - 7.0).abs() < 1e-12);
            assert!((out.upper[i] - 7.0).abs() < 1e-12);
            assert!((out.lower[i] - 7.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_band_ordering() {
        let bb = BollingerBands::try_new(5, 2.0).unwrap();
        let data: Vec<f64> = (0..20).map(|i| 100.0 + (i as f64 * 0.9).sin() * 5.0).collect();
        let out = bb.calculate(&data);

        for i in 4..20 {
            assert!(out.upper[i] >= out.sma[i]);
            assert!(out.lower[i] <= out.sma[i]);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            BollingerBands::try_new(1, 2.0),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(matches!(
            BollingerBands::try_new(20, 0.0),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(matches!(
            BollingerBands::try_new(20, -1.0),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_recompute_is_bit_identical() {
        let bb = BollingerBands::standard();
        let data: Vec<f64> = (0..60).map(|i| 50.0 + (i as f64 * 0.4).cos() * 2.0).collect();

        let first = bb.calculate(&data);
        let second = bb.calculate(&data);

        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first.sma), bits(&second.sma));
        assert_eq!(bits(&first.upper), bits(&second.upper));
        assert_eq!(bits(&first.lower), bits(&second.lower));
    }
}
