#![forbid(unsafe_code)]
//! Browser bindings for `sitetheme-core`: the live document, `localStorage`,
//! the `prefers-color-scheme` query and the page's click and input events.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod config;
pub mod customizer;
pub mod dom;
pub mod error;
pub mod media;
pub mod menus;
pub mod storage;
pub mod surface;

pub use customizer::{PageCustomizer, SharedCustomizer};
pub use error::WebError;
pub use surface::LiveDocument;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Fails only when another logger is already installed.
    let _ = console_log::init_with_level(config::log_level());
    if let Err(err) = dom::on_ready(|| {
        if let Err(err) = boot() {
            log::error!("sitetheme failed to start: {err}");
        }
    }) {
        log::error!("sitetheme failed to schedule startup: {err}");
    }
}

/// Bind the menus and mount the customizer on the current document.
///
/// Listeners keep the returned customizer alive for the page's lifetime.
///
/// # Errors
/// Returns an error when no document is available or a listener cannot be attached.
pub fn boot() -> Result<SharedCustomizer, WebError> {
    let window = dom::window().ok_or(WebError::Missing("window"))?;
    let page = LiveDocument::current().ok_or(WebError::Missing("document"))?;
    menus::bind(&page)?;
    let customizer = customizer::mount(page, &window)?;
    log::debug!("sitetheme ready");
    Ok(customizer)
}
