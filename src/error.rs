use wasm_bindgen::JsValue;

pub type LandingResult<T> = Result<T, LandingError>;

/// Failures of the host page. None of these are recoverable from inside the
/// page; callers log them and fall back to a static rendering.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LandingError {
    #[error("no global window")]
    NoWindow,

    #[error("canvas element is not mounted")]
    CanvasNotMounted,

    #[error("canvas has no 2d context")]
    NoCanvasContext,

    #[error("viewport observer error: {0}")]
    Observer(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl LandingError {
    pub fn observer(msg: impl Into<String>) -> Self {
        Self::Observer(msg.into())
    }
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(msg)
    }
}
