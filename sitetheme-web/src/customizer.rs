//! Mounts the theme customizer on the live page and wires the drawer controls.

use crate::config;
use crate::dom;
use crate::error::WebError;
use crate::media::MediaThemeSignal;
use crate::storage::BrowserStorage;
use crate::surface::LiveDocument;
use js_sys::{Function, Reflect};
use sitetheme_core::{Customizer, Hook, PageSurface, PreferenceStore, SettingsUpdate};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement, Window};

pub type PageCustomizer = Customizer<LiveDocument, BrowserStorage, MediaThemeSignal>;
pub type SharedCustomizer = Rc<RefCell<PageCustomizer>>;

/// Class Bootstrap uses for an open offcanvas panel.
const OFFCANVAS_SHOW: &str = "show";

/// Build the customizer for `page`, apply the stored settings and bind the drawer.
///
/// # Errors
/// Returns an error if a control listener cannot be attached.
pub fn mount(page: LiveDocument, window: &Window) -> Result<SharedCustomizer, WebError> {
    let store = PreferenceStore::new(BrowserStorage::local(), config::storage_key());
    let mut customizer = Customizer::new(page, store, MediaThemeSignal::new(window));
    customizer.initialize();
    let shared = Rc::new(RefCell::new(customizer));
    bind(&shared)?;
    Ok(shared)
}

/// Attach listeners for every customizer control present on the page.
///
/// Controls missing from the markup are skipped.
///
/// # Errors
/// Returns an error if the browser rejects a listener.
pub fn bind(customizer: &SharedCustomizer) -> Result<(), WebError> {
    let page = customizer.borrow().surface().clone();

    for button in page.select(Hook::ColorButtons) {
        let shared = Rc::clone(customizer);
        let control = button.clone();
        dom::listen(&button, "click", move |_event: Event| {
            let key = control.get_attribute("data-color").unwrap_or_default();
            shared.borrow_mut().select_color_key(&key);
        })?;
    }

    for button in page.select(Hook::ModeButtons) {
        let shared = Rc::clone(customizer);
        let control = button.clone();
        dom::listen(&button, "click", move |_event: Event| {
            let key = control.get_attribute("data-mode").unwrap_or_default();
            shared.borrow_mut().select_mode_key(&key);
        })?;
    }

    bind_toggle(customizer, &page, Hook::StickyToggle, SettingsUpdate::StickyHeader)?;
    bind_toggle(customizer, &page, Hook::CompactToggle, SettingsUpdate::CompactSidebar)?;
    bind_toggle(customizer, &page, Hook::FooterToggle, SettingsUpdate::ShowFooter)?;

    if let Some(slider) = input_for(&page, Hook::FontSlider) {
        let shared = Rc::clone(customizer);
        let control = slider.clone();
        dom::listen(&slider, "input", move |_event: Event| {
            shared.borrow_mut().set_font_input(&control.value());
        })?;
    }

    if let Some(reset) = page.select_one(Hook::ResetButton) {
        let shared = Rc::clone(customizer);
        dom::listen(&reset, "click", move |_event: Event| {
            shared.borrow_mut().reset_to_defaults();
        })?;
    }

    if let Some(close) = page.select_one(Hook::CloseButton) {
        let surface = page.clone();
        dom::listen(&close, "click", move |_event: Event| close_drawer(&surface))?;
    }

    Ok(())
}

fn input_for(page: &LiveDocument, hook: Hook) -> Option<HtmlInputElement> {
    let input = page
        .select_one(hook)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if input.is_none() {
        log::debug!("no input for {}", hook.selector());
    }
    input
}

fn bind_toggle(
    customizer: &SharedCustomizer,
    page: &LiveDocument,
    hook: Hook,
    update: fn(bool) -> SettingsUpdate,
) -> Result<(), WebError> {
    let Some(input) = input_for(page, hook) else {
        return Ok(());
    };
    let shared = Rc::clone(customizer);
    let control = input.clone();
    dom::listen(&input, "change", move |_event: Event| {
        shared.borrow_mut().update(update(control.checked()));
    })
}

/// Hide the customization drawer through Bootstrap when it is loaded,
/// otherwise by dropping its `show` class.
pub fn close_drawer(page: &LiveDocument) {
    let Some(drawer) = page.select_one(Hook::Drawer) else {
        return;
    };
    match hide_with_bootstrap(&drawer) {
        Ok(true) => {}
        Ok(false) => page.remove_class(&drawer, OFFCANVAS_SHOW),
        Err(err) => {
            log::warn!("Bootstrap offcanvas hide failed: {err}");
            page.remove_class(&drawer, OFFCANVAS_SHOW);
        }
    }
}

fn hide_with_bootstrap(drawer: &Element) -> Result<bool, WebError> {
    let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return Ok(false);
    }
    let offcanvas = Reflect::get(&bootstrap, &JsValue::from_str("Offcanvas"))?;
    let get_instance: Function =
        Reflect::get(&offcanvas, &JsValue::from_str("getInstance"))?.dyn_into()?;
    let instance = get_instance.call1(&offcanvas, drawer)?;
    if instance.is_undefined() || instance.is_null() {
        return Ok(false);
    }
    let hide: Function = Reflect::get(&instance, &JsValue::from_str("hide"))?.dyn_into()?;
    hide.call0(&instance)?;
    Ok(true)
}
