use crate::error::WebError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, Storage, Window};

/// Retrieve the global `window` object, if running in a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, WebError> {
    window()
        .ok_or(WebError::Missing("window"))?
        .local_storage()?
        .ok_or(WebError::Missing("localStorage"))
}

/// Attach `handler` to `target` for the rest of the page's lifetime.
///
/// # Errors
/// Returns an error if the browser rejects the listener.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once the document has parsed, immediately if it already has.
///
/// # Errors
/// Returns an error if no document is available or the listener cannot be attached.
pub fn on_ready(f: impl FnOnce() + 'static) -> Result<(), WebError> {
    let doc = document().ok_or(WebError::Missing("document"))?;
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let closure = Closure::once(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
