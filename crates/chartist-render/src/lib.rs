//! Render adapters for completed analyses.
//!
//! The analysis core produces data; everything visual happens here. The
//! [`ChartSpec`] types describe a two-panel chart (price with bands and
//! signal markers, MACD with histogram), and [`JsonChartRenderer`] encodes
//! that description as JSON for whatever canvas ends up drawing it.

mod chart_spec;
mod json;

pub use chart_spec::{ChartPoint, ChartSpec, Layer, LineStyle, MarkerShape, Panel};
pub use json::JsonChartRenderer;
