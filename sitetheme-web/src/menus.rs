//! Click wiring for desktop dropdowns and the mobile accordion menu.

use crate::dom;
use crate::error::WebError;
use crate::surface::LiveDocument;
use sitetheme_core::menu::{SUBMENU_ICON, SUBMENU_TOGGLE};
use sitetheme_core::{Hook, PageSurface, close_all_dropdowns, toggle_dropdown, toggle_submenu};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Bind every dropdown button, the outside-click closer and the mobile submenu toggles.
///
/// # Errors
/// Returns an error if the browser rejects a listener.
pub fn bind(page: &LiveDocument) -> Result<(), WebError> {
    bind_dropdowns(page)?;
    bind_submenus(page)
}

fn bind_dropdowns(page: &LiveDocument) -> Result<(), WebError> {
    for button in page.select(Hook::DropdownButtons) {
        let Some(content) = button.next_element_sibling() else {
            log::debug!("dropdown button without content; skipped");
            continue;
        };
        let surface = page.clone();
        dom::listen(&button, "click", move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            toggle_dropdown(&surface, &content);
        })?;
    }

    let surface = page.clone();
    dom::listen(page.document(), "click", move |event: Event| {
        if !inside_dropdown(&event) {
            close_all_dropdowns(&surface);
        }
    })
}

fn inside_dropdown(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(Hook::DropdownRoot.selector()).ok().flatten())
        .is_some()
}

fn bind_submenus(page: &LiveDocument) -> Result<(), WebError> {
    for item in page.select(Hook::SubmenuItems) {
        let Some(toggle) = item.query_selector(SUBMENU_TOGGLE).ok().flatten() else {
            continue;
        };
        let surface = page.clone();
        let control = toggle.clone();
        dom::listen(&toggle, "click", move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            let Some(submenu) = control.next_element_sibling() else {
                return;
            };
            let icon = control.query_selector(SUBMENU_ICON).ok().flatten();
            toggle_submenu(&surface, &submenu, icon.as_ref());
        })?;
    }
    Ok(())
}
