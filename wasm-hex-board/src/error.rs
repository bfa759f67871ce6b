/// Error types for board generation and painting

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoardError {
    #[error("unknown game mode: {0}")]
    UnknownVariant(String),
    #[error("browser window or document unavailable")]
    NoDocument,
    #[error("no canvas element with id `{0}`")]
    CanvasNotFound(String),
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BoardError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        BoardError::Js(message)
    }
}

impl From<BoardError> for JsValue {
    fn from(err: BoardError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
