//! Build-time configuration for the browser bundle.
//!
//! `SITETHEME_STORAGE_KEY` renames the `localStorage` entry so several sites on
//! one origin keep separate preferences. `SITETHEME_LOG` sets the console log
//! level (`error` through `trace`).

use log::Level;
use sitetheme_core::DEFAULT_STORAGE_KEY;

#[must_use]
pub fn storage_key() -> String {
    storage_key_with_override(option_env!("SITETHEME_STORAGE_KEY").unwrap_or(""))
}

#[must_use]
pub fn log_level() -> Level {
    log_level_with_override(option_env!("SITETHEME_LOG").unwrap_or(""))
}

fn storage_key_with_override(key: &str) -> String {
    let key = key.trim();
    if key.is_empty() {
        DEFAULT_STORAGE_KEY.to_string()
    } else {
        key.to_string()
    }
}

fn log_level_with_override(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::Info)
}

#[cfg(test)]
mod tests {
    use super::{log_level, storage_key};
    use log::Level;

    #[test]
    fn storage_key_defaults_to_theme_settings() {
        assert_eq!(storage_key(), "themeSettings");
        assert_eq!(super::storage_key_with_override("   "), "themeSettings");
    }

    #[test]
    fn storage_key_override_is_trimmed() {
        assert_eq!(
            super::storage_key_with_override(" campusTheme "),
            String::from("campusTheme")
        );
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(log_level(), Level::Info);
        assert_eq!(super::log_level_with_override("loud"), Level::Info);
    }

    #[test]
    fn log_level_accepts_any_case() {
        assert_eq!(super::log_level_with_override("DEBUG"), Level::Debug);
        assert_eq!(super::log_level_with_override("warn"), Level::Warn);
    }
}
