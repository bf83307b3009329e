//! Render adapter trait definition.

use crate::error::ChartError;
use crate::types::Analysis;

/// Trait for render adapters.
///
/// An adapter consumes a completed analysis and produces a visual artifact.
/// All visual encoding (colors, markers, axis layout) belongs to the
/// adapter; the core only supplies the data.
pub trait RenderAdapter {
    /// The artifact this adapter produces.
    type Artifact;

    /// Render the analysis into an artifact.
    fn render(&self, analysis: &Analysis) -> Result<Self::Artifact, ChartError>;
}
