use crate::dom::js_error_message;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("{0} unavailable")]
    Missing(&'static str),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}
