//! Core trait definitions.

mod indicator;
mod price_source;
mod render;

pub use indicator::Indicator;
pub use price_source::PriceSource;
pub use render::RenderAdapter;
