//! Per-query analysis result.

use std::fmt;

use serde::Serialize;

use super::{IndicatorBundle, SignalSet, TimeSeries};

/// Caller-visible quality note attached to an analysis.
///
/// Notes are not errors: the computation completed, the caller just gets
/// told what to expect from the output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QualityNote {
    /// The input series is shorter than the longest configured window, so
    /// a large prefix of the derived series is undefined.
    InsufficientHistory { required: usize, available: usize },
}

impl fmt::Display for QualityNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityNote::InsufficientHistory {
                required,
                available,
            } => write!(
                f,
                "insufficient history: {available} points for a {required}-point window"
            ),
        }
    }
}

/// Everything one date-range query produces: the input prices, the aligned
/// derived series, and the signals. This is the tuple handed to a render
/// adapter. Created fresh per query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Instrument symbol the query was made for
    pub symbol: String,
    /// Input closing prices
    pub prices: TimeSeries,
    /// Derived indicator series, aligned to the price domain
    pub indicators: IndicatorBundle,
    /// Buy/sell crossover signals
    pub signals: SignalSet,
    /// Quality notes (warm-up coverage etc.)
    pub notes: Vec<QualityNote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_note_display() {
        let note = QualityNote::InsufficientHistory {
            required: 26,
            available: 10,
        };
        assert_eq!(
            note.to_string(),
            "insufficient history: 10 points for a 26-point window"
        );
    }
}
