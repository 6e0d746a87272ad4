use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::BarChartRenderer;
use crate::domain::{
    chart::{BarChartLayout, BarRow, ChartStyle},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};
use crate::log_warn;

/// Space around the drawn rows, in CSS pixels.
pub const CANVAS_PADDING: f64 = 8.0;

/// Pixel placement of one row (precomputed, independent of the canvas).
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value_text: String,
    pub color: String,
    pub row_y: f64,
    pub row_height: f64,
    pub text_y: f64,
    pub label_x: f64,
    pub track_x: f64,
    pub track_width: f64,
    pub bar_width: f64,
    /// Right edge for the right-aligned value text.
    pub value_x: f64,
}

/// Canvas 2D renderer for bar charts - Infrastructure implementation
pub struct CanvasRenderer {
    canvas_id: String,
    width: u32,
    style: ChartStyle,
}

impl CanvasRenderer {
    pub fn new(canvas_id: impl Into<String>, width: u32, style: ChartStyle) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            width,
            style,
        }
    }

    /// Height needed to show `rows` rows; zero for an empty chart.
    pub fn content_height(&self, rows: usize) -> f64 {
        if rows == 0 {
            return 0.0;
        }
        let rows = rows as f64;
        CANVAS_PADDING * 2.0 + rows * self.style.row_height + (rows - 1.0) * self.style.row_gap
    }

    pub fn compute_geometry(&self, layout: &BarChartLayout) -> Vec<BarGeometry> {
        #[cfg(feature = "parallel")]
        if layout.len() >= crate::domain::chart::PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            return layout.rows.par_iter().map(|row| self.row_geometry(row)).collect();
        }

        layout.rows.iter().map(|row| self.row_geometry(row)).collect()
    }

    fn row_geometry(&self, row: &BarRow) -> BarGeometry {
        let style = &self.style;
        let width = self.width as f64;
        let track_x = CANVAS_PADDING + style.label_width;
        let track_width =
            (width - CANVAS_PADDING * 2.0 - style.label_width - style.value_width).max(0.0);
        let row_y = CANVAS_PADDING + row.index as f64 * (style.row_height + style.row_gap);

        BarGeometry {
            label: row.label.clone(),
            value_text: row.value_text.clone(),
            color: row.color.to_css(),
            row_y,
            row_height: style.row_height,
            text_y: row_y + style.row_height / 2.0,
            label_x: CANVAS_PADDING,
            track_x,
            track_width,
            bar_width: track_width * row.proportion.value(),
            value_x: width - CANVAS_PADDING,
        }
    }

    fn get_canvas_context(&self) -> RenderingResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::DomError("document not available".to_string()))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| AppError::DomError(format!("canvas '{}' not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::DomError(format!("'{}' is not a canvas", self.canvas_id)))?;

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?;

        Ok((canvas, context))
    }

    fn draw_row(&self, context: &CanvasRenderingContext2d, geometry: &BarGeometry) -> RenderingResult<()> {
        let text_error = |_| AppError::RenderingError("fill_text failed".to_string());

        context.set_fill_style_str(&self.style.label_color.to_css());
        context.set_text_align("left");
        context
            .fill_text(&geometry.label, geometry.label_x, geometry.text_y)
            .map_err(text_error)?;

        context.set_fill_style_str(&self.style.track.to_css());
        context.fill_rect(geometry.track_x, geometry.row_y, geometry.track_width, geometry.row_height);

        if geometry.bar_width > 0.0 {
            context.set_fill_style_str(&geometry.color);
            context.fill_rect(geometry.track_x, geometry.row_y, geometry.bar_width, geometry.row_height);
        }

        context.set_fill_style_str(&self.style.label_color.to_css());
        context.set_text_align("right");
        context
            .fill_text(&geometry.value_text, geometry.value_x, geometry.text_y)
            .map_err(text_error)?;

        Ok(())
    }
}

impl BarChartRenderer for CanvasRenderer {
    fn render(&mut self, layout: &BarChartLayout) -> RenderingResult<()> {
        let (canvas, context) = self.get_canvas_context()?;
        let height = self.content_height(layout.len());

        canvas.set_width(self.width);
        canvas.set_height(height as u32);
        context.clear_rect(0.0, 0.0, self.width as f64, height);

        if layout.is_empty() {
            get_logger().debug(
                LogComponent::Infrastructure("CanvasRenderer"),
                "Empty layout, nothing to draw",
            );
            return Ok(());
        }

        context.set_font(&self.style.font);
        context.set_text_baseline("middle");

        let geometry = self.compute_geometry(layout);
        if geometry.first().is_some_and(|row| row.track_width == 0.0) {
            log_warn!(
                LogComponent::Infrastructure("CanvasRenderer"),
                "Canvas '{}' is {}px wide, too narrow for any bar track",
                self.canvas_id,
                self.width
            );
        }

        for geometry in geometry {
            self.draw_row(&context, &geometry)?;
        }

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("Drew {} bars on '{}'", layout.len(), self.canvas_id),
        );
        Ok(())
    }
}
