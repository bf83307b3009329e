//! JSON render adapter.

use chartist_core::error::ChartError;
use chartist_core::traits::RenderAdapter;
use chartist_core::types::Analysis;

use crate::chart_spec::ChartSpec;

/// Renders an analysis as a JSON chart specification.
#[derive(Debug, Clone, Default)]
pub struct JsonChartRenderer {
    pretty: bool,
}

impl JsonChartRenderer {
    /// Create a compact-output renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit indented JSON instead of compact.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl RenderAdapter for JsonChartRenderer {
    type Artifact = String;

    fn render(&self, analysis: &Analysis) -> Result<String, ChartError> {
        let spec = ChartSpec::from_analysis(analysis);
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&spec)
        } else {
            serde_json::to_string(&spec)
        };
        encoded.map_err(|e| ChartError::Serialization(e.to_string()))
    }
}
