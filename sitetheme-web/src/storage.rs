use crate::dom::{self, js_error_message};
use sitetheme_core::{KeyValueStore, PrefsError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`KeyValueStore`] backed by the browser's `localStorage`.
///
/// Private browsing modes can deny storage entirely; every call then fails
/// with [`PrefsError::Storage`] and the customizer keeps running on defaults.
#[derive(Debug, Clone, Default)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    #[must_use]
    pub fn local() -> Self {
        let storage = dom::local_storage()
            .map_err(|err| log::warn!("localStorage unavailable: {err}"))
            .ok();
        Self { storage }
    }

    fn handle(&self) -> Result<&Storage, PrefsError> {
        self.storage
            .as_ref()
            .ok_or_else(|| PrefsError::Storage("localStorage unavailable".to_string()))
    }
}

fn storage_error(err: &JsValue) -> PrefsError {
    PrefsError::Storage(js_error_message(err))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PrefsError> {
        self.handle()?
            .get_item(key)
            .map_err(|err| storage_error(&err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.handle()?
            .set_item(key, value)
            .map_err(|err| storage_error(&err))
    }

    fn remove_item(&self, key: &str) -> Result<(), PrefsError> {
        self.handle()?
            .remove_item(key)
            .map_err(|err| storage_error(&err))
    }
}
