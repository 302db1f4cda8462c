use serde::{Deserialize, Serialize};
use std::fmt;

/// Accent color family applied to the navbar, call-to-action and text accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Pink,
    Indigo,
    Gray,
}

impl ColorScheme {
    pub const ALL: [Self; 8] = [
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Red,
        Self::Yellow,
        Self::Pink,
        Self::Indigo,
        Self::Gray,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Gray => "gray",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.key() == key)
    }

    /// Parse a raw control value, falling back to the default scheme.
    #[must_use]
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            log::warn!("unknown color scheme {key:?}, using default");
            Self::default()
        })
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Light/dark presentation mode. `Auto` follows the system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ThemeMode {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Auto];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }

    #[must_use]
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            log::warn!("unknown theme mode {key:?}, using default");
            Self::default()
        })
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Base font size step, 1 (small) through 5 (large).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FontLevel(u8);

impl FontLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: Self = Self(3);

    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= Self::MIN && level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Parse slider text such as `"4"`; anything unusable maps to the default level.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .unwrap_or_else(|| {
                log::warn!("font size {raw:?} out of range, using default");
                Self::DEFAULT
            })
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for FontLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for FontLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "font size {value} outside {}..={}",
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<FontLevel> for u8 {
    fn from(level: FontLevel) -> Self {
        level.0
    }
}

/// The persisted customization record.
///
/// Every field is required when deserializing: a record missing any of them
/// is rejected as a whole rather than merged with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub color_scheme: ColorScheme,
    pub theme_mode: ThemeMode,
    pub sticky_header: bool,
    pub compact_sidebar: bool,
    pub show_footer: bool,
    pub font_size: FontLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Blue,
            theme_mode: ThemeMode::Light,
            sticky_header: false,
            compact_sidebar: false,
            show_footer: true,
            font_size: FontLevel::DEFAULT,
        }
    }
}

impl Settings {
    /// Parse a stored record.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the text is not a complete, valid record.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to the stored JSON shape.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Copy of `self` with exactly one field overwritten.
    #[must_use]
    pub fn with(mut self, update: SettingsUpdate) -> Self {
        match update {
            SettingsUpdate::ColorScheme(color) => self.color_scheme = color,
            SettingsUpdate::ThemeMode(mode) => self.theme_mode = mode,
            SettingsUpdate::StickyHeader(on) => self.sticky_header = on,
            SettingsUpdate::CompactSidebar(on) => self.compact_sidebar = on,
            SettingsUpdate::ShowFooter(on) => self.show_footer = on,
            SettingsUpdate::FontSize(level) => self.font_size = level,
        }
        self
    }
}

/// A change to a single settings field, as produced by one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsUpdate {
    ColorScheme(ColorScheme),
    ThemeMode(ThemeMode),
    StickyHeader(bool),
    CompactSidebar(bool),
    ShowFooter(bool),
    FontSize(FontLevel),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_record() {
        let json = Settings::default().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"colorScheme":"blue","themeMode":"light","stickyHeader":false,"compactSidebar":false,"showFooter":true,"fontSize":3}"#
        );
    }

    #[test]
    fn record_with_missing_field_is_rejected() {
        let partial = r#"{"colorScheme":"green","themeMode":"dark"}"#;
        assert!(Settings::from_json(partial).is_err());
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        let bad_color = r#"{"colorScheme":"teal","themeMode":"light","stickyHeader":false,"compactSidebar":false,"showFooter":true,"fontSize":3}"#;
        let bad_font = r#"{"colorScheme":"blue","themeMode":"light","stickyHeader":false,"compactSidebar":false,"showFooter":true,"fontSize":9}"#;
        assert!(Settings::from_json(bad_color).is_err());
        assert!(Settings::from_json(bad_font).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{"colorScheme":"pink","themeMode":"auto","stickyHeader":true,"compactSidebar":true,"showFooter":false,"fontSize":1,"legacy":42}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.color_scheme, ColorScheme::Pink);
        assert_eq!(settings.theme_mode, ThemeMode::Auto);
        assert_eq!(settings.font_size.get(), 1);
    }

    #[test]
    fn with_overwrites_only_the_named_field() {
        let base = Settings::default();
        let next = base.with(SettingsUpdate::StickyHeader(true));
        assert!(next.sticky_header);
        assert_eq!(next.with(SettingsUpdate::StickyHeader(false)), base);
    }

    #[test]
    fn key_lookups_default_on_unknown_values() {
        assert_eq!(ColorScheme::from_key("indigo"), Some(ColorScheme::Indigo));
        assert_eq!(ColorScheme::from_key_or_default("chartreuse"), ColorScheme::Blue);
        assert_eq!(ThemeMode::from_key_or_default(""), ThemeMode::Light);
    }

    #[test]
    fn font_input_parsing() {
        assert_eq!(FontLevel::from_input("5").get(), 5);
        assert_eq!(FontLevel::from_input(" 2 ").get(), 2);
        assert_eq!(FontLevel::from_input("0"), FontLevel::DEFAULT);
        assert_eq!(FontLevel::from_input("large"), FontLevel::DEFAULT);
    }
}
