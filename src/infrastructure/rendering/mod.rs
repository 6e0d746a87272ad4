pub mod canvas_renderer;
pub mod text_renderer;

pub use canvas_renderer::{BarGeometry, CanvasRenderer};
pub use text_renderer::TextRenderer;

use crate::domain::{chart::BarChartLayout, errors::RenderingResult};

/// A host surface that can draw a finished layout.
pub trait BarChartRenderer {
    fn render(&mut self, layout: &BarChartLayout) -> RenderingResult<()>;
}
