//! Declarative class and style tables for every setting.

use crate::settings::{ColorScheme, FontLevel};
use once_cell::sync::Lazy;

/// Utility classes one color scheme contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorClasses {
    pub bg: &'static str,
    pub hover: &'static str,
    pub text: &'static str,
    pub hover_text: &'static str,
    /// Accent buttons sit one shade lighter than the navbar.
    pub accent_bg: &'static str,
    pub accent_hover: &'static str,
}

const fn entry(
    bg: &'static str,
    hover: &'static str,
    text: &'static str,
    hover_text: &'static str,
    accent_bg: &'static str,
    accent_hover: &'static str,
) -> ColorClasses {
    ColorClasses {
        bg,
        hover,
        text,
        hover_text,
        accent_bg,
        accent_hover,
    }
}

pub static PALETTE: [(ColorScheme, ColorClasses); 8] = [
    (
        ColorScheme::Blue,
        entry("bg-blue-600", "hover:bg-blue-700", "text-blue-600", "hover:text-blue-500", "bg-blue-500", "hover:bg-blue-600"),
    ),
    (
        ColorScheme::Green,
        entry("bg-green-600", "hover:bg-green-700", "text-green-600", "hover:text-green-500", "bg-green-500", "hover:bg-green-600"),
    ),
    (
        ColorScheme::Purple,
        entry("bg-purple-600", "hover:bg-purple-700", "text-purple-600", "hover:text-purple-500", "bg-purple-500", "hover:bg-purple-600"),
    ),
    (
        ColorScheme::Red,
        entry("bg-red-600", "hover:bg-red-700", "text-red-600", "hover:text-red-500", "bg-red-500", "hover:bg-red-600"),
    ),
    (
        ColorScheme::Yellow,
        entry("bg-yellow-500", "hover:bg-yellow-600", "text-yellow-500", "hover:text-yellow-500", "bg-yellow-500", "hover:bg-yellow-600"),
    ),
    (
        ColorScheme::Pink,
        entry("bg-pink-600", "hover:bg-pink-700", "text-pink-600", "hover:text-pink-500", "bg-pink-500", "hover:bg-pink-600"),
    ),
    (
        ColorScheme::Indigo,
        entry("bg-indigo-600", "hover:bg-indigo-700", "text-indigo-600", "hover:text-indigo-500", "bg-indigo-500", "hover:bg-indigo-600"),
    ),
    (
        ColorScheme::Gray,
        entry("bg-gray-700", "hover:bg-gray-800", "text-gray-600", "hover:text-gray-500", "bg-gray-500", "hover:bg-gray-600"),
    ),
];

#[must_use]
pub fn color_classes(color: ColorScheme) -> &'static ColorClasses {
    PALETTE
        .iter()
        .find(|(scheme, _)| *scheme == color)
        .map_or(&PALETTE[0].1, |(_, classes)| classes)
}

fn column(pick: fn(&ColorClasses) -> &'static str) -> Vec<&'static str> {
    PALETTE.iter().map(|(_, classes)| pick(classes)).collect()
}

pub static ALL_BG: Lazy<Vec<&'static str>> = Lazy::new(|| column(|c| c.bg));
pub static ALL_HOVER: Lazy<Vec<&'static str>> = Lazy::new(|| column(|c| c.hover));
pub static ALL_TEXT: Lazy<Vec<&'static str>> = Lazy::new(|| column(|c| c.text));
pub static ALL_HOVER_TEXT: Lazy<Vec<&'static str>> = Lazy::new(|| column(|c| c.hover_text));
pub static ALL_ACCENT: Lazy<Vec<&'static str>> = Lazy::new(|| {
    PALETTE
        .iter()
        .flat_map(|(_, c)| [c.accent_bg, c.accent_hover])
        .collect()
});
/// CTA family: navbar background plus hover shades.
pub static ALL_CTA: Lazy<Vec<&'static str>> =
    Lazy::new(|| ALL_BG.iter().chain(ALL_HOVER.iter()).copied().collect());

/// Every `bg-{color}-{500,600,700}`; stripped from the navbar on reset.
pub static RESET_NAVBAR_STRIP: Lazy<Vec<String>> = Lazy::new(|| {
    ColorScheme::ALL
        .iter()
        .flat_map(|color| ["500", "600", "700"].map(|shade| format!("bg-{color}-{shade}")))
        .collect()
});

/// Every background and hover shade the CTA could have carried; stripped on reset.
pub static RESET_CTA_STRIP: Lazy<Vec<String>> = Lazy::new(|| {
    ColorScheme::ALL
        .iter()
        .flat_map(|color| {
            ["500", "600", "700"]
                .map(|shade| format!("bg-{color}-{shade}"))
                .into_iter()
                .chain(["600", "700", "800"].map(|shade| format!("hover:bg-{color}-{shade}")))
        })
        .collect()
});

pub const CTA_DEFAULT: [&str; 2] = ["bg-blue-600", "hover:bg-blue-700"];

pub const DARK_MARKER: &str = "dark";
pub const LEGACY_BODY_DARK: &str = "dark-mode";

pub const FOOTER_BACKGROUNDS: [&str; 3] = ["bg-white", "bg-gray-100", "bg-gray-800"];
pub const FOOTER_FIXED_BG: [&str; 1] = ["bg-gray-800"];

pub const ICON_CONTRAST: [&str; 2] = ["text-gray-500", "text-gray-300"];
pub const ICON_LIGHT: [&str; 1] = ["text-gray-500"];
pub const ICON_DARK: [&str; 1] = ["text-gray-300"];

pub const NEWS_TEXT: [&str; 1] = ["text-gray-700"];
pub const NEWS_TEXT_DARK: [&str; 1] = ["dark:text-gray-300"];

pub const CARD_SHADOWS: [&str; 2] = ["shadow", "shadow-lg"];
pub const CARD_SHADOW_LIGHT: [&str; 1] = ["shadow"];
pub const CARD_SHADOW_DARK: [&str; 1] = ["shadow-lg"];

pub const STICKY: [&str; 3] = ["sticky", "top-0", "z-50"];
pub const COMPACT_SIDEBAR: [&str; 1] = ["compact-sidebar"];
pub const HIDDEN: [&str; 1] = ["hidden"];

pub const SELECTED_RING: [&str; 3] = ["ring-2", "ring-offset-2", "ring-gray-500"];

pub const DRAWER_BACKGROUND: &str = "#ffffff";
pub const DRAWER_TEXT: &str = "#111827";
pub const FOOTER_HEADING_DARK: &str = "white";

/// Root font size for a level.
#[must_use]
pub const fn font_size_value(level: FontLevel) -> &'static str {
    match level.get() {
        1 => "0.875rem",
        2 => "0.9375rem",
        4 => "1.0625rem",
        5 => "1.125rem",
        _ => "1rem",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_scheme_has_one_entry() {
        let schemes: BTreeSet<_> = PALETTE.iter().map(|(s, _)| s.key()).collect();
        assert_eq!(schemes.len(), ColorScheme::ALL.len());
        for color in ColorScheme::ALL {
            assert!(color_classes(color).bg.starts_with("bg-"));
        }
    }

    #[test]
    fn accent_buttons_use_the_lighter_shade() {
        let green = color_classes(ColorScheme::Green);
        assert_eq!(green.bg, "bg-green-600");
        assert_eq!(green.accent_bg, "bg-green-500");
        assert_eq!(green.accent_hover, "hover:bg-green-600");
        assert_eq!(ALL_ACCENT.len(), 16);
    }

    #[test]
    fn gray_and_yellow_keep_their_irregular_shades() {
        assert_eq!(color_classes(ColorScheme::Gray).bg, "bg-gray-700");
        assert_eq!(color_classes(ColorScheme::Gray).text, "text-gray-600");
        assert_eq!(color_classes(ColorScheme::Yellow).hover_text, "hover:text-yellow-500");
    }

    #[test]
    fn reset_strip_lists_cover_every_shade() {
        assert_eq!(RESET_NAVBAR_STRIP.len(), 24);
        assert!(RESET_NAVBAR_STRIP.contains(&"bg-indigo-700".to_string()));
        assert_eq!(RESET_CTA_STRIP.len(), 48);
        assert!(RESET_CTA_STRIP.contains(&"hover:bg-gray-800".to_string()));
    }

    #[test]
    fn font_table_values() {
        let sizes: Vec<_> = (1..=5)
            .filter_map(FontLevel::new)
            .map(font_size_value)
            .collect();
        assert_eq!(
            sizes,
            ["0.875rem", "0.9375rem", "1rem", "1.0625rem", "1.125rem"]
        );
    }
}
