//! Time-series types for prices and derived indicators.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DataError;

/// A single (timestamp, close) observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Closing price
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    pub fn new(timestamp: i64, close: f64) -> Self {
        Self { timestamp, close }
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }
}

/// An ordered (timestamp, value) series.
///
/// Timestamps are Unix milliseconds, strictly increasing, with no duplicates;
/// construction validates this. Values are `f64` with `NaN` as the explicit
/// "undefined" marker (warm-up gaps in derived series). A series is never
/// mutated after construction; derivations produce new series on the same
/// timestamp domain via [`TimeSeries::with_values`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from parallel timestamp and value vectors.
    pub fn new(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self, DataError> {
        if timestamps.len() != values.len() {
            return Err(DataError::LengthMismatch {
                expected: timestamps.len(),
                actual: values.len(),
            });
        }
        for pair in timestamps.windows(2) {
            if pair[1] <= pair[0] {
                return Err(DataError::NonMonotonic {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { timestamps, values })
    }

    /// Create a series from price points.
    pub fn from_points(points: &[PricePoint]) -> Result<Self, DataError> {
        Self::new(
            points.iter().map(|p| p.timestamp).collect(),
            points.iter().map(|p| p.close).collect(),
        )
    }

    /// Number of points in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// The timestamp domain.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// The values, parallel to the timestamp domain.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get a (timestamp, value) pair by index.
    pub fn get(&self, index: usize) -> Option<(i64, f64)> {
        Some((*self.timestamps.get(index)?, *self.values.get(index)?))
    }

    /// Get the last (timestamp, value) pair.
    pub fn last(&self) -> Option<(i64, f64)> {
        if self.is_empty() {
            None
        } else {
            self.get(self.len() - 1)
        }
    }

    /// Derive a new series on the same timestamp domain.
    ///
    /// This is how indicator outputs stay aligned with their input: the
    /// values change, the domain never does.
    pub fn with_values(&self, values: Vec<f64>) -> Result<Self, DataError> {
        if values.len() != self.timestamps.len() {
            return Err(DataError::LengthMismatch {
                expected: self.timestamps.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            timestamps: self.timestamps.clone(),
            values,
        })
    }

    /// Iterate over (timestamp, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Check whether another series shares this series' timestamp domain.
    pub fn same_domain(&self, other: &TimeSeries) -> bool {
        self.timestamps == other.timestamps
    }
}
