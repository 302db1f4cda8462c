//! Maps each setting onto the page.
//!
//! Every function here is idempotent and independent of the others: it only
//! touches the class families and styles its own setting owns, and it strips
//! the whole family before adding the selected classes.

use crate::classes::{ClassRule, StyleRule, apply_rules, apply_styles};
use crate::palette::{
    self, ALL_ACCENT, ALL_BG, ALL_CTA, ALL_HOVER, ALL_HOVER_TEXT, ALL_TEXT, CARD_SHADOW_DARK,
    CARD_SHADOW_LIGHT, CARD_SHADOWS, COMPACT_SIDEBAR, DARK_MARKER, DRAWER_BACKGROUND, DRAWER_TEXT,
    FOOTER_BACKGROUNDS, FOOTER_FIXED_BG, FOOTER_HEADING_DARK, HIDDEN, ICON_CONTRAST, ICON_DARK,
    ICON_LIGHT, NEWS_TEXT, NEWS_TEXT_DARK, STICKY,
};
use crate::settings::{ColorScheme, FontLevel, Settings, ThemeMode};
use crate::surface::{Hook, PageSurface};

const MARKER: [&str; 1] = [DARK_MARKER];

const HEADINGS_WHITE: [StyleRule; 1] =
    [StyleRule::new(Hook::FooterHeadings, "color", FOOTER_HEADING_DARK)];

const MODE_BASELINE: [ClassRule<'static>; 2] = [
    ClassRule::toggle(Hook::Root, &MARKER, false),
    ClassRule::swap(Hook::DarkFooter, &FOOTER_BACKGROUNDS, &FOOTER_FIXED_BG),
];

const DARK_RULES: [ClassRule<'static>; 4] = [
    ClassRule::toggle(Hook::Root, &MARKER, true),
    ClassRule::replace(Hook::Icons, &ICON_CONTRAST, &ICON_DARK),
    ClassRule::replace(Hook::NewsCardText, &NEWS_TEXT, &NEWS_TEXT_DARK),
    ClassRule::replace(Hook::Cards, &CARD_SHADOWS, &CARD_SHADOW_DARK),
];

const LIGHT_RULES: [ClassRule<'static>; 2] = [
    ClassRule::replace(Hook::Icons, &ICON_CONTRAST, &ICON_LIGHT),
    ClassRule::replace(Hook::Cards, &CARD_SHADOWS, &CARD_SHADOW_LIGHT),
];

const SYSTEM_DARK_RULES: [ClassRule<'static>; 2] = [
    ClassRule::toggle(Hook::Root, &MARKER, true),
    ClassRule::replace(Hook::Cards, &CARD_SHADOWS, &CARD_SHADOW_DARK),
];

const SYSTEM_LIGHT_RULES: [ClassRule<'static>; 2] = [
    ClassRule::toggle(Hook::Root, &MARKER, false),
    ClassRule::replace(Hook::Cards, &CARD_SHADOWS, &CARD_SHADOW_LIGHT),
];

const DRAWER_STYLES: [StyleRule; 5] = [
    StyleRule::new(Hook::Drawer, "background-color", DRAWER_BACKGROUND),
    StyleRule::new(Hook::Drawer, "color", DRAWER_TEXT),
    StyleRule::new(Hook::DrawerText, "color", DRAWER_TEXT),
    StyleRule::new(Hook::DrawerHeader, "background-color", DRAWER_BACKGROUND),
    StyleRule::new(Hook::DrawerBody, "background-color", DRAWER_BACKGROUND),
];

/// Recolor the navbar, its controls, the CTA, accent buttons and palette text.
pub fn apply_color_scheme<S: PageSurface>(surface: &S, color: ColorScheme) {
    let target = palette::color_classes(color);
    let bg = [target.bg];
    let hover = [target.hover];
    let cta = [target.bg, target.hover];
    let accent = [target.accent_bg, target.accent_hover];
    let text = [target.text];
    let hover_text = [target.hover_text];

    if surface.select_one(Hook::Navbar).is_some() {
        apply_rules(
            surface,
            &[
                ClassRule::swap(Hook::Navbar, &ALL_BG, &bg),
                ClassRule::swap(Hook::NavLinks, &ALL_HOVER, &hover),
                ClassRule::swap(Hook::MobileMenuButton, &ALL_HOVER, &hover),
                ClassRule::swap(Hook::CustomizeButton, &ALL_HOVER, &hover),
            ],
        );
    }

    apply_rules(
        surface,
        &[
            ClassRule::swap(Hook::PrimaryCta, &ALL_CTA, &cta),
            ClassRule::swap(Hook::AccentButtons, &ALL_ACCENT, &accent),
            ClassRule::replace(Hook::ColorText, &ALL_TEXT, &text),
            ClassRule::replace(Hook::HoverText, &ALL_HOVER_TEXT, &hover_text),
        ],
    );
}

/// Apply light, dark or system-following presentation.
///
/// `system_dark` is the system preference at call time; only `Auto` reads it.
/// The dark footer and the drawer keep their fixed appearance in every mode.
pub fn apply_theme_mode<S: PageSurface>(surface: &S, mode: ThemeMode, system_dark: bool) {
    apply_rules(surface, &MODE_BASELINE);

    match mode {
        ThemeMode::Dark => {
            apply_rules(surface, &DARK_RULES);
            apply_styles(surface, &HEADINGS_WHITE);
        }
        ThemeMode::Auto => apply_system_preference(surface, system_dark),
        ThemeMode::Light => apply_rules(surface, &LIGHT_RULES),
    }

    preserve_drawer(surface);
}

/// Follow a system preference flip while in auto mode.
pub fn apply_system_preference<S: PageSurface>(surface: &S, dark: bool) {
    if dark {
        apply_rules(surface, &SYSTEM_DARK_RULES);
        apply_styles(surface, &HEADINGS_WHITE);
    } else {
        apply_rules(surface, &SYSTEM_LIGHT_RULES);
    }
}

pub fn apply_sticky_header<S: PageSurface>(surface: &S, sticky: bool) {
    apply_rules(surface, &[ClassRule::toggle(Hook::Navbar, &STICKY, sticky)]);
}

pub fn apply_compact_sidebar<S: PageSurface>(surface: &S, compact: bool) {
    apply_rules(
        surface,
        &[ClassRule::toggle(Hook::Sidebar, &COMPACT_SIDEBAR, compact)],
    );
}

pub fn apply_show_footer<S: PageSurface>(surface: &S, show: bool) {
    if let Some(footer) = surface.select_one(Hook::Footer) {
        let rule = ClassRule::toggle(Hook::Footer, &HIDDEN, !show);
        rule.diff().apply_to(surface, &footer);
    }
}

pub fn apply_font_size<S: PageSurface>(surface: &S, level: FontLevel) {
    if let Some(root) = surface.select_one(Hook::Root) {
        surface.set_style(&root, "font-size", palette::font_size_value(level));
    }
}

/// Pin the customization drawer to a light, readable appearance.
pub fn preserve_drawer<S: PageSurface>(surface: &S) {
    if surface.select_one(Hook::Drawer).is_none() {
        return;
    }
    apply_styles(surface, &DRAWER_STYLES);
}

/// Run every applicator once for `settings`.
pub fn apply_settings<S: PageSurface>(surface: &S, settings: &Settings, system_dark: bool) {
    apply_color_scheme(surface, settings.color_scheme);
    apply_theme_mode(surface, settings.theme_mode, system_dark);
    apply_sticky_header(surface, settings.sticky_header);
    apply_compact_sidebar(surface, settings.compact_sidebar);
    apply_show_footer(surface, settings.show_footer);
    apply_font_size(surface, settings.font_size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryPage, NodeId};

    struct Fixture {
        page: MemoryPage,
        navbar: NodeId,
        link: NodeId,
        cta: NodeId,
        accent: NodeId,
        accent_text: NodeId,
        plain_text: NodeId,
        icon: NodeId,
        card: NodeId,
        news_text: NodeId,
        footer_dark: NodeId,
        heading: NodeId,
        drawer: NodeId,
        drawer_label: NodeId,
    }

    fn fixture() -> Fixture {
        let page = MemoryPage::new();
        Fixture {
            navbar: page.insert(&[Hook::Navbar], &["bg-blue-600", "text-white"]),
            link: page.insert(&[Hook::NavLinks], &["hover:bg-blue-700"]),
            cta: page.insert(&[Hook::PrimaryCta], &["bg-blue-600", "hover:bg-blue-700"]),
            accent: page.insert(&[Hook::AccentButtons], &["bg-blue-500", "hover:bg-blue-600"]),
            accent_text: page.insert(&[], &["text-blue-600", "hover:text-blue-500"]),
            plain_text: page.insert(&[], &["text-lg", "text-white"]),
            icon: page.insert(&[Hook::Icons], &["text-gray-500"]),
            card: page.insert(&[Hook::Cards], &["program-card", "shadow"]),
            news_text: page.insert(&[Hook::NewsCardText], &["text-gray-700"]),
            footer_dark: page.insert(&[Hook::DarkFooter], &["footer-dark", "bg-white"]),
            heading: page.insert(&[Hook::FooterHeadings], &[]),
            drawer: page.insert(&[Hook::Drawer], &[]),
            drawer_label: page.insert(&[Hook::DrawerText], &[]),
            page,
        }
    }

    #[test]
    fn color_scheme_rewrites_every_managed_group() {
        let f = fixture();
        apply_color_scheme(&f.page, ColorScheme::Purple);

        assert!(f.page.has(f.navbar, "bg-purple-600"));
        assert!(!f.page.has(f.navbar, "bg-blue-600"));
        assert!(f.page.has(f.navbar, "text-white"));
        assert_eq!(f.page.classes(f.link), vec!["hover:bg-purple-700"]);
        assert_eq!(f.page.classes(f.cta), vec!["bg-purple-600", "hover:bg-purple-700"]);
        assert_eq!(f.page.classes(f.accent), vec!["bg-purple-500", "hover:bg-purple-600"]);
        assert_eq!(
            f.page.classes(f.accent_text),
            vec!["hover:text-purple-500", "text-purple-600"]
        );
        assert_eq!(f.page.classes(f.plain_text), vec!["text-lg", "text-white"]);
    }

    #[test]
    fn nav_controls_are_left_alone_without_a_navbar() {
        let page = MemoryPage::new();
        let link = page.insert(&[Hook::NavLinks], &["hover:bg-red-700"]);
        let cta = page.insert(&[Hook::PrimaryCta], &["bg-red-600"]);
        apply_color_scheme(&page, ColorScheme::Green);
        assert_eq!(page.classes(link), vec!["hover:bg-red-700"]);
        assert_eq!(page.classes(cta), vec!["bg-green-600", "hover:bg-green-700"]);
    }

    #[test]
    fn dark_mode_applies_contrast_adjustments() {
        let f = fixture();
        apply_theme_mode(&f.page, ThemeMode::Dark, false);

        assert!(f.page.has(f.page.root(), "dark"));
        assert_eq!(f.page.classes(f.icon), vec!["text-gray-300"]);
        assert_eq!(f.page.classes(f.news_text), vec!["dark:text-gray-300"]);
        assert!(f.page.has(f.card, "shadow-lg"));
        assert!(!f.page.has(f.card, "shadow"));
        assert_eq!(f.page.style(f.heading, "color").as_deref(), Some("white"));
        assert_eq!(f.page.classes(f.footer_dark), vec!["bg-gray-800", "footer-dark"]);
    }

    #[test]
    fn light_mode_reverts_icons_and_shadows() {
        let f = fixture();
        apply_theme_mode(&f.page, ThemeMode::Dark, false);
        apply_theme_mode(&f.page, ThemeMode::Light, false);

        assert!(!f.page.has(f.page.root(), "dark"));
        assert_eq!(f.page.classes(f.icon), vec!["text-gray-500"]);
        assert_eq!(f.page.classes(f.card), vec!["program-card", "shadow"]);
        assert!(f.page.has(f.footer_dark, "bg-gray-800"));
    }

    #[test]
    fn auto_mode_follows_the_system_value_at_call_time() {
        let f = fixture();
        apply_theme_mode(&f.page, ThemeMode::Auto, true);
        assert!(f.page.has(f.page.root(), "dark"));
        assert!(f.page.has(f.card, "shadow-lg"));
        // icon contrast is a dark-mode-only adjustment
        assert_eq!(f.page.classes(f.icon), vec!["text-gray-500"]);

        apply_theme_mode(&f.page, ThemeMode::Auto, false);
        assert!(!f.page.has(f.page.root(), "dark"));
        assert!(f.page.has(f.card, "shadow"));
    }

    #[test]
    fn drawer_stays_light_in_every_mode() {
        for mode in ThemeMode::ALL {
            let f = fixture();
            apply_theme_mode(&f.page, mode, true);
            assert_eq!(
                f.page.style(f.drawer, "background-color").as_deref(),
                Some("#ffffff")
            );
            assert_eq!(f.page.style(f.drawer_label, "color").as_deref(), Some("#111827"));
        }
    }

    #[test]
    fn layout_toggles() {
        let page = MemoryPage::new();
        let navbar = page.insert(&[Hook::Navbar], &[]);
        let sidebar = page.insert(&[Hook::Sidebar], &[]);
        let footer = page.insert(&[Hook::Footer], &["py-8"]);

        apply_sticky_header(&page, true);
        apply_compact_sidebar(&page, true);
        apply_show_footer(&page, false);
        assert_eq!(page.classes(navbar), vec!["sticky", "top-0", "z-50"]);
        assert_eq!(page.classes(sidebar), vec!["compact-sidebar"]);
        assert!(page.has(footer, "hidden"));

        apply_sticky_header(&page, false);
        apply_compact_sidebar(&page, false);
        apply_show_footer(&page, true);
        assert!(page.classes(navbar).is_empty());
        assert!(page.classes(sidebar).is_empty());
        assert_eq!(page.classes(footer), vec!["py-8"]);
    }

    #[test]
    fn missing_targets_are_no_ops() {
        let page = MemoryPage::new();
        let before = page.snapshot();
        apply_settings(&page, &Settings::default(), true);
        apply_sticky_header(&page, true);
        apply_show_footer(&page, false);
        assert_eq!(page.snapshot(), before);
    }

    #[test]
    fn font_size_sets_root_style() {
        let page = MemoryPage::new();
        apply_font_size(&page, FontLevel::new(1).unwrap());
        assert_eq!(page.style(page.root(), "font-size").as_deref(), Some("0.875rem"));
        apply_font_size(&page, FontLevel::default());
        assert_eq!(page.style(page.root(), "font-size").as_deref(), Some("1rem"));
    }
}
