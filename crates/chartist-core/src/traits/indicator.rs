//! Indicator trait definition.

use crate::error::IndicatorError;

/// Trait for technical indicators.
///
/// Indicators derive new series from a price series. Output is always
/// aligned: the same length as the input, with NaN marking indices where
/// a rolling window has not yet filled.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Self::Output;

    /// Number of points needed before every output series is defined.
    fn min_history(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Check that enough history is available for a fully-defined output.
    ///
    /// Short history is a quality concern, not a failure: indicators still
    /// compute over whatever they are given, so callers decide whether to
    /// treat this as fatal.
    fn check_history(&self, available: usize) -> Result<(), IndicatorError> {
        if available < self.min_history() {
            return Err(IndicatorError::InsufficientHistory {
                required: self.min_history(),
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        window: usize,
    }

    impl Indicator for TestIndicator {
        type Output = Vec<f64>;

        fn calculate(&self, data: &[f64]) -> Vec<f64> {
            data.to_vec()
        }

        fn min_history(&self) -> usize {
            self.window
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_check_history() {
        let indicator = TestIndicator { window: 5 };

        assert!(indicator.check_history(3).is_err());
        assert!(indicator.check_history(5).is_ok());
        assert!(indicator.check_history(100).is_ok());
    }
}
