use derive_more::Display;

/// Errors raised at host boundaries. Degenerate chart input is normalized
/// by the layout service and never ends up here.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Validation Error: {}", _0)]
    ValidationError(String),
    #[display(fmt = "Deserialization Error: {}", _0)]
    DeserializationError(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    RenderingError(String),
    #[display(fmt = "DOM Error: {}", _0)]
    DomError(String),
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::DeserializationError(error.to_string())
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type RenderingResult<T> = Result<T, AppError>;
