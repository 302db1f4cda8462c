//! The `prefers-color-scheme` media query as a [`SystemTheme`].

use crate::dom::js_error_message;
use sitetheme_core::SystemTheme;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Default)]
pub struct MediaThemeSignal {
    list: Option<MediaQueryList>,
}

impl MediaThemeSignal {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let list = window.match_media(DARK_QUERY).ok().flatten();
        if list.is_none() {
            log::debug!("matchMedia unavailable; system theme reads as light");
        }
        Self { list }
    }
}

/// A registered `change` listener. Dropping it removes the listener.
pub struct MediaWatch {
    list: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl Drop for MediaWatch {
    fn drop(&mut self) {
        if let Err(err) = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach system theme listener: {}", js_error_message(&err));
        }
    }
}

impl SystemTheme for MediaThemeSignal {
    type Watch = MediaWatch;

    fn prefers_dark(&self) -> bool {
        self.list.as_ref().is_some_and(MediaQueryList::matches)
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Option<MediaWatch> {
        let list = self.list.clone()?;
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| on_change(event.matches()),
        );
        match list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(MediaWatch { list, callback }),
            Err(err) => {
                log::warn!("failed to watch system theme: {}", js_error_message(&err));
                None
            }
        }
    }
}
