#![forbid(unsafe_code)]
//! sitetheme core
//!
//! Platform-agnostic logic behind the site's dropdown menus and theme
//! customizer: the persisted settings record, the class tables every setting
//! maps onto, the remove-then-add class transforms, and the controller that
//! ties controls, page and storage together. Nothing here depends on a
//! browser; the web crate supplies [`PageSurface`], [`KeyValueStore`] and
//! [`SystemTheme`] implementations backed by `web-sys`.

pub mod applicator;
pub mod classes;
pub mod controller;
pub mod memory;
pub mod menu;
pub mod palette;
pub mod settings;
pub mod store;
pub mod surface;
pub mod system;

pub use applicator::{
    apply_color_scheme, apply_compact_sidebar, apply_font_size, apply_settings,
    apply_show_footer, apply_sticky_header, apply_system_preference, apply_theme_mode,
    preserve_drawer,
};
pub use classes::{ClassDiff, ClassRule, Scope, StyleRule, apply_rules, derive_classes};
pub use controller::Customizer;
pub use menu::{DropdownState, close_all_dropdowns, toggle_dropdown, toggle_submenu};
pub use settings::{ColorScheme, FontLevel, Settings, SettingsUpdate, ThemeMode};
pub use store::{DEFAULT_STORAGE_KEY, KeyValueStore, PreferenceStore, PrefsError};
pub use surface::{Hook, PageSurface};
pub use system::SystemTheme;
