//! Core types and traits for the chart analysis system.
//!
//! This crate provides the foundational building blocks including:
//! - Time-series types (PricePoint, TimeSeries)
//! - Derived indicator and signal containers (IndicatorBundle, SignalSet)
//! - Core traits for price sources, indicators, and render adapters

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ChartError, ChartResult};
pub use traits::*;
pub use types::*;
