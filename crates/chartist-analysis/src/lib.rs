//! Analysis pipeline for a single instrument.
//!
//! Combines the two indicator engines with crossover signal generation:
//! fetch a close series, derive the aligned indicator bundle, mark the
//! buy/sell timestamps, hand the result to a render adapter.

pub mod pipeline;
pub mod signals;

pub use pipeline::{Analyzer, AnalyzerParams};
pub use signals::generate_signals;
