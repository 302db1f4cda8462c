use crate::settings::{Settings, SettingsUpdate};
use thiserror::Error;

/// Key the settings record is stored under unless the host overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "themeSettings";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Synchronous string key-value storage, shaped like `localStorage`.
pub trait KeyValueStore {
    /// # Errors
    /// Returns an error when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// # Errors
    /// Returns an error when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), PrefsError>;

    /// # Errors
    /// Returns an error when the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), PrefsError>;
}

/// The persisted [`Settings`] record under one storage key.
#[derive(Debug, Clone)]
pub struct PreferenceStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> PreferenceStore<K> {
    pub fn new(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Strict read: `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    /// Returns an error if storage is unreadable or the record does not parse.
    pub fn read(&self) -> Result<Option<Settings>, PrefsError> {
        self.backend
            .get_item(&self.key)?
            .map(|raw| Settings::from_json(&raw).map_err(PrefsError::from))
            .transpose()
    }

    /// Stored settings, or the defaults when the record is absent or unusable.
    #[must_use]
    pub fn load(&self) -> Settings {
        match self.read() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(err) => {
                log::warn!("discarding stored settings: {err}");
                Settings::default()
            }
        }
    }

    /// Like [`Self::load`], but writes the defaults back when no usable record exists.
    pub fn load_or_seed(&self) -> Settings {
        match self.read() {
            Ok(Some(settings)) => settings,
            other => {
                if let Err(err) = other {
                    log::warn!("discarding stored settings: {err}");
                }
                let defaults = Settings::default();
                if let Err(err) = self.write(&defaults) {
                    log::warn!("could not seed default settings: {err}");
                }
                defaults
            }
        }
    }

    /// # Errors
    /// Returns an error if serialization or the storage write fails.
    pub fn write(&self, settings: &Settings) -> Result<(), PrefsError> {
        let json = settings.to_json()?;
        self.backend.set_item(&self.key, &json)
    }

    /// Overwrite one field of the current (or default) record and store the full record.
    ///
    /// # Errors
    /// Returns an error if the write fails; the returned record is not persisted then.
    pub fn save(&self, update: SettingsUpdate) -> Result<Settings, PrefsError> {
        let next = self.load().with(update);
        self.write(&next)?;
        Ok(next)
    }

    /// Replace whatever is stored with the default record.
    ///
    /// A failed removal is logged; the default record is still written over it.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub fn reset(&self) -> Result<(), PrefsError> {
        if let Err(err) = self.backend.remove_item(&self.key) {
            log::warn!("could not remove stored settings: {err}");
        }
        self.write(&Settings::default())
    }
}
