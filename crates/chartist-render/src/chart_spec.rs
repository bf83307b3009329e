//! Render-ready chart description.

use serde::Serialize;

use chartist_core::types::{Analysis, TimeSeries};

/// One (timestamp, value) point in a layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Y-axis value
    pub value: f64,
}

/// Line rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Marker glyph for signal layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    TriangleUp,
    TriangleDown,
}

/// A drawable layer within a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    /// A connected line; gaps where the source series was undefined.
    Line {
        label: String,
        color: String,
        style: LineStyle,
        points: Vec<ChartPoint>,
    },
    /// Discrete markers (signal glyphs) drawn at price level.
    Markers {
        label: String,
        color: String,
        shape: MarkerShape,
        points: Vec<ChartPoint>,
    },
    /// Vertical bars colored by sign.
    Bars {
        label: String,
        positive_color: String,
        negative_color: String,
        points: Vec<ChartPoint>,
    },
    /// A horizontal reference line.
    HorizontalLine { value: f64, color: String },
}

/// One stacked panel with a shared x-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub y_label: String,
    pub layers: Vec<Layer>,
}

/// A two-panel chart description: price overlays on top, MACD below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl ChartSpec {
    /// Build the two-panel layout from a completed analysis.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let indicators = &analysis.indicators;

        let price_panel = Panel {
            title: format!("{} Price with Bollinger Bands", analysis.symbol),
            y_label: "Price".to_string(),
            layers: vec![
                line(&analysis.prices, "Price", "blue", LineStyle::Solid),
                line(&indicators.sma, "SMA", "orange", LineStyle::Solid),
                line(&indicators.upper_band, "Upper Band", "green", LineStyle::Dashed),
                line(&indicators.lower_band, "Lower Band", "red", LineStyle::Dashed),
                Layer::Markers {
                    label: "Buy Signal".to_string(),
                    color: "green".to_string(),
                    shape: MarkerShape::TriangleUp,
                    points: at_price(&analysis.prices, analysis.signals.buys()),
                },
                Layer::Markers {
                    label: "Sell Signal".to_string(),
                    color: "red".to_string(),
                    shape: MarkerShape::TriangleDown,
                    points: at_price(&analysis.prices, analysis.signals.sells()),
                },
            ],
        };

        let macd_panel = Panel {
            title: "MACD Indicator with Histogram".to_string(),
            y_label: "MACD Value".to_string(),
            layers: vec![
                line(&indicators.macd_line, "MACD Line", "purple", LineStyle::Solid),
                line(&indicators.signal_line, "Signal Line", "gray", LineStyle::Solid),
                Layer::Bars {
                    label: "MACD Histogram".to_string(),
                    positive_color: "green".to_string(),
                    negative_color: "red".to_string(),
                    points: finite_points(&indicators.histogram),
                },
                Layer::HorizontalLine {
                    value: 0.0,
                    color: "black".to_string(),
                },
            ],
        };

        Self {
            title: format!("{} Bollinger Bands & MACD", analysis.symbol),
            panels: vec![price_panel, macd_panel],
        }
    }
}

fn line(series: &TimeSeries, label: &str, color: &str, style: LineStyle) -> Layer {
    Layer::Line {
        label: label.to_string(),
        color: color.to_string(),
        style,
        points: finite_points(series),
    }
}

/// Finite points of a series; undefined warm-up entries become gaps.
fn finite_points(series: &TimeSeries) -> Vec<ChartPoint> {
    series
        .iter()
        .filter(|(_, value)| value.is_finite())
        .map(|(timestamp, value)| ChartPoint { timestamp, value })
        .collect()
}

/// Marker points at the price level of each signal timestamp.
fn at_price(prices: &TimeSeries, timestamps: &[i64]) -> Vec<ChartPoint> {
    timestamps
        .iter()
        .filter_map(|&timestamp| {
            let index = prices.timestamps().binary_search(&timestamp).ok()?;
            Some(ChartPoint {
                timestamp,
                value: prices.values()[index],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartist_analysis::Analyzer;

    fn sample_analysis() -> Analysis {
        // Flat prefix, then a dip and a partial rebound
        let mut values = vec![10.0; 30];
        values.extend([9.0, 8.5, 8.0, 8.2, 8.4]);
        let timestamps = (0..values.len() as i64).map(|i| i * 86_400_000).collect();
        let prices = TimeSeries::new(timestamps, values).unwrap();

        Analyzer::standard().analyze_series("GLD", prices).unwrap()
    }

    #[test]
    fn test_two_panel_layout() {
        let spec = ChartSpec::from_analysis(&sample_analysis());

        assert_eq!(spec.panels.len(), 2);
        assert_eq!(spec.panels[0].layers.len(), 6);
        assert_eq!(spec.panels[1].layers.len(), 4);
        assert!(spec.title.contains("GLD"));
    }

    #[test]
    fn test_warm_up_becomes_a_gap() {
        let analysis = sample_analysis();
        let spec = ChartSpec::from_analysis(&analysis);

        let sma_layer = &spec.panels[0].layers[1];
        match sma_layer {
            Layer::Line { points, .. } => {
                // 19 warm-up points dropped from a 35-point series
                assert_eq!(points.len(), analysis.prices.len() - 19);
                assert!(points.iter().all(|p| p.value.is_finite()));
            }
            other => panic!("expected a line layer, got {other:?}"),
        }
    }

    #[test]
    fn test_histogram_has_no_gap() {
        let analysis = sample_analysis();
        let spec = ChartSpec::from_analysis(&analysis);

        match &spec.panels[1].layers[2] {
            Layer::Bars { points, .. } => {
                // Zero-coerced, so every timestamp is present
                assert_eq!(points.len(), analysis.prices.len());
            }
            other => panic!("expected a bars layer, got {other:?}"),
        }
    }

    #[test]
    fn test_markers_sit_on_the_price() {
        let analysis = sample_analysis();
        let spec = ChartSpec::from_analysis(&analysis);

        match &spec.panels[0].layers[4] {
            Layer::Markers { points, .. } => {
                for point in points {
                    let index = analysis
                        .prices
                        .timestamps()
                        .binary_search(&point.timestamp)
                        .unwrap();
                    assert_eq!(point.value, analysis.prices.values()[index]);
                }
            }
            other => panic!("expected a markers layer, got {other:?}"),
        }
    }
}
