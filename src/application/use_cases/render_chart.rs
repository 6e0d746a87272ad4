use crate::domain::{
    chart::{BarChartLayout, BarLayoutService, ChartInput, ChartStyle},
    errors::RenderingResult,
    logging::LogComponent,
};
use crate::infrastructure::rendering::BarChartRenderer;
use crate::{log_debug, log_error};

/// Lays out a chart and hands it to a rendering layer.
pub struct RenderBarChartUseCase<R: BarChartRenderer> {
    renderer: R,
    layout_service: BarLayoutService,
    style: ChartStyle,
}

impl<R: BarChartRenderer> RenderBarChartUseCase<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_style(renderer, ChartStyle::default())
    }

    pub fn with_style(renderer: R, style: ChartStyle) -> Self {
        Self {
            renderer,
            layout_service: BarLayoutService::new(),
            style,
        }
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs one render pass. Only renderer failures surface as errors.
    pub fn execute(&mut self, input: &ChartInput) -> RenderingResult<BarChartLayout> {
        let layout = self.layout_service.layout(input, &self.style);

        if let Err(e) = self.renderer.render(&layout) {
            log_error!(
                LogComponent::Application("RenderBarChartUseCase"),
                "Render pass failed: {}",
                e
            );
            return Err(e);
        }

        log_debug!(
            LogComponent::Application("RenderBarChartUseCase"),
            "Rendered {} rows (max {})",
            layout.len(),
            layout.effective_max
        );
        Ok(layout)
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
