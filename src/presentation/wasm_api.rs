use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::BarChart;
use crate::application::use_cases::RenderBarChartUseCase;
use crate::domain::{
    chart::{BarLayoutService, ChartInput, ChartStyle},
    errors::AppError,
    logging::LogComponent,
};
use crate::infrastructure::rendering::CanvasRenderer;
use crate::{log_debug, log_info};

/// JavaScript entry point. Every call takes the chart input as JSON:
/// `{ "items": [{ "label": "a", "value": 1, "color": "#f00" }], "explicitMax": 10 }`.
///
/// The chart is mounted once per container; later `render` and `setStyle`
/// calls only update its signals.
#[wasm_bindgen]
pub struct BarChartApi {
    container_id: String,
    input: RwSignal<ChartInput>,
    style: RwSignal<ChartStyle>,
    mounted: Option<web_sys::HtmlElement>,
}

#[wasm_bindgen]
impl BarChartApi {
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: String) -> Self {
        Self {
            container_id,
            input: create_rw_signal(ChartInput::default()),
            style: create_rw_signal(ChartStyle::default()),
            mounted: None,
        }
    }

    /// Replace the style; omitted fields take their defaults. A mounted
    /// chart restyles in place.
    #[wasm_bindgen(js_name = setStyle)]
    pub fn set_style(&mut self, style_json: &str) -> Result<(), JsValue> {
        let style: ChartStyle = serde_json::from_str(style_json).map_err(AppError::from)?;
        self.style.set(style);
        Ok(())
    }

    /// Show `input_json` in the container, replacing what it showed before.
    pub fn render(&mut self, input_json: &str) -> Result<(), JsValue> {
        let input = ChartInput::from_json(input_json)?;
        let container = self.container()?;

        if self.mounted.as_ref() != Some(&container) {
            self.mount(container);
        }

        log_debug!(
            LogComponent::Presentation("BarChartApi"),
            "Showing {} bars in '{}'",
            input.items.len(),
            self.container_id
        );
        self.input.set(input);
        Ok(())
    }

    /// Draw the chart onto a `<canvas>`; its height follows the row count.
    #[wasm_bindgen(js_name = renderCanvas)]
    pub fn render_canvas(&self, canvas_id: &str, width: u32, input_json: &str) -> Result<(), JsValue> {
        let input = ChartInput::from_json(input_json)?;
        let style = self.style.get_untracked();
        let renderer = CanvasRenderer::new(canvas_id, width, style.clone());
        RenderBarChartUseCase::with_style(renderer, style).execute(&input)?;
        Ok(())
    }

    /// Computed rows as JSON, without touching the DOM.
    pub fn layout(&self, input_json: &str) -> Result<String, JsValue> {
        let input = ChartInput::from_json(input_json)?;
        let layout = self
            .style
            .with_untracked(|style| BarLayoutService::new().layout(&input, style));
        Ok(layout.to_json()?)
    }
}

impl BarChartApi {
    fn mount(&mut self, container: web_sys::HtmlElement) {
        container.set_inner_html("");

        let input = self.input;
        let style: Signal<ChartStyle> = self.style.into();
        let items = Signal::derive(move || input.with(|input| input.items.clone()));
        let max_value = Signal::derive(move || input.with(|input| input.explicit_max));
        mount_to(container.clone(), move || {
            view! { <BarChart items=items max_value=max_value style=style/> }
        });

        log_info!(
            LogComponent::Presentation("BarChartApi"),
            "Mounted chart into '{}'",
            self.container_id
        );
        self.mounted = Some(container);
    }

    fn container(&self) -> Result<web_sys::HtmlElement, AppError> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&self.container_id))
            .ok_or_else(|| AppError::DomError(format!("container '{}' not found", self.container_id)))?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| AppError::DomError(format!("'{}' is not an HTML element", self.container_id)))
    }
}

/// Mount the demo page into `<body>`.
#[wasm_bindgen(js_name = mountDemo)]
pub fn mount_demo() {
    mount_to_body(crate::app::App);
}
