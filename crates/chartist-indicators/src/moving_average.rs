//! Moving average primitives.

use chartist_core::error::IndicatorError;
use chartist_core::traits::Indicator;

/// Simple Moving Average (SMA), aligned to its input.
///
/// The first `window - 1` outputs are NaN: a partial window is a warm-up
/// gap, not a shorter average.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn try_new(window: usize) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "SMA window must be at least 1".into(),
            ));
        }
        Ok(Self { window })
    }

    /// The rolling window length.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Indicator for Sma {
    type Output = Vec<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        let mut result = vec![f64::NAN; data.len()];
        if data.len() < self.window {
            return result;
        }

        let window_f64 = self.window as f64;

        // Initial sum, then slide
        let mut sum: f64 = data[..self.window].iter().sum();
        result[self.window - 1] = sum / window_f64;

        for i in self.window..data.len() {
            sum = sum - data[i - self.window] + data[i];
            result[i] = sum / window_f64;
        }

        result
    }

    fn min_history(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA) in the recursive form.
///
/// `alpha = 2 / (span + 1)`, and the first sample seeds the recursion
/// directly: `ema[0] = value[0]`. There is no delayed bootstrap, so the
/// output is defined at every input index. This matches the seeding the
/// signal timing depends on; the SMA-seeded variant common in trading
/// libraries produces different values and a shorter output.
///
/// Non-finite inputs poison the recursion from their index onwards; engine
/// entry points coerce inputs first (see [`crate::zero_filled`]).
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    alpha: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn try_new(span: usize) -> Result<Self, IndicatorError> {
        if span == 0 {
            return Err(IndicatorError::InvalidParameter(
                "EMA span must be at least 1".into(),
            ));
        }
        Ok(Self {
            span,
            alpha: 2.0 / (span as f64 + 1.0),
        })
    }

    /// The smoothing span.
    pub fn span(&self) -> usize {
        self.span
    }

    /// The smoothing factor derived from the span.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Indicator for Ema {
    type Output = Vec<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        let mut result = Vec::with_capacity(data.len());

        let mut ema = match data.first() {
            Some(&first) => first,
            None => return result,
        };
        result.push(ema);

        let one_minus_alpha = 1.0 - self.alpha;
        for &value in &data[1..] {
            ema = self.alpha * value + one_minus_alpha * ema;
            result.push(ema);
        }

        result
    }

    fn min_history(&self) -> usize {
        self.span
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_alignment() {
        let sma = Sma::try_new(3).unwrap();
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), data.len());
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!((result[2] - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[3] - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[4] - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::try_new(5).unwrap();
        let result = sma.calculate(&[1.0, 2.0, 3.0]);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_sma_invalid_window() {
        assert!(matches!(
            Sma::try_new(0),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_ema_seeding() {
        // span=3 => alpha = 0.5; ema[0] is the first sample itself
        let ema = Ema::try_new(3).unwrap();
        let result = ema.calculate(&[2.0, 4.0, 8.0]);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-12);
        assert!((result[1] - 3.0).abs() < 1e-12); // 0.5*4 + 0.5*2
        assert!((result[2] - 5.5).abs() < 1e-12); // 0.5*8 + 0.5*3
    }

    #[test]
    fn test_ema_defined_everywhere() {
        let ema = Ema::try_new(26).unwrap();
        let data = vec![10.0; 5];
        let result = ema.calculate(&data);

        // Defined for any non-empty input, even shorter than the span
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|v| (v - 10.0).abs() < 1e-12));
    }

    #[test]
    fn test_ema_empty_input() {
        let ema = Ema::try_new(12).unwrap();
        assert!(ema.calculate(&[]).is_empty());
    }

    #[test]
    fn test_ema_invalid_span() {
        assert!(matches!(
            Ema::try_new(0),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }
}
