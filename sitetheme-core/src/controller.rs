use crate::applicator;
use crate::classes::ClassRule;
use crate::palette::{
    CTA_DEFAULT, DARK_MARKER, LEGACY_BODY_DARK, RESET_CTA_STRIP, RESET_NAVBAR_STRIP, SELECTED_RING,
};
use crate::settings::{ColorScheme, FontLevel, Settings, SettingsUpdate, ThemeMode};
use crate::store::{KeyValueStore, PreferenceStore};
use crate::surface::{Hook, PageSurface};
use crate::system::SystemTheme;

/// Owns the page, the persisted record and the live settings, and keeps the
/// three consistent as controls change.
///
/// While the theme mode is `Auto` the customizer holds exactly one system
/// preference subscription; switching to another mode drops it.
pub struct Customizer<S, K, T: SystemTheme> {
    surface: S,
    store: PreferenceStore<K>,
    system: T,
    settings: Settings,
    auto_watch: Option<T::Watch>,
}

impl<S, K, T> Customizer<S, K, T>
where
    S: PageSurface + Clone + 'static,
    K: KeyValueStore,
    T: SystemTheme,
{
    pub fn new(surface: S, store: PreferenceStore<K>, system: T) -> Self {
        Self {
            surface,
            store,
            system,
            settings: Settings::default(),
            auto_watch: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn is_watching_system(&self) -> bool {
        self.auto_watch.is_some()
    }

    /// Load the stored record (seeding defaults if needed) and apply all of it.
    pub fn initialize(&mut self) {
        let settings = self.store.load_or_seed();
        log::debug!(
            "initializing customizer: {} / {}",
            settings.color_scheme,
            settings.theme_mode
        );
        self.apply_all(settings);
    }

    /// Apply one control change, then persist it.
    pub fn update(&mut self, update: SettingsUpdate) {
        self.settings = self.settings.with(update);
        match update {
            SettingsUpdate::ColorScheme(color) => {
                applicator::apply_color_scheme(&self.surface, color);
                self.mark_selected(Hook::ColorButtons, "color", color.key());
            }
            SettingsUpdate::ThemeMode(mode) => {
                applicator::apply_theme_mode(&self.surface, mode, self.system.prefers_dark());
                self.sync_system_watch();
                self.mark_selected(Hook::ModeButtons, "mode", mode.key());
            }
            SettingsUpdate::StickyHeader(on) => {
                applicator::apply_sticky_header(&self.surface, on);
            }
            SettingsUpdate::CompactSidebar(on) => {
                applicator::apply_compact_sidebar(&self.surface, on);
            }
            SettingsUpdate::ShowFooter(on) => {
                applicator::apply_show_footer(&self.surface, on);
            }
            SettingsUpdate::FontSize(level) => {
                applicator::apply_font_size(&self.surface, level);
            }
        }
        if let Err(err) = self.store.save(update) {
            log::warn!("could not persist {update:?}: {err}");
        }
    }

    /// Color button handler; `key` is the button's `data-color`.
    pub fn select_color_key(&mut self, key: &str) {
        self.update(SettingsUpdate::ColorScheme(ColorScheme::from_key_or_default(key)));
    }

    /// Mode button handler; `key` is the button's `data-mode`.
    pub fn select_mode_key(&mut self, key: &str) {
        self.update(SettingsUpdate::ThemeMode(ThemeMode::from_key_or_default(key)));
    }

    /// Slider handler; `raw` is the input's current value.
    pub fn set_font_input(&mut self, raw: &str) {
        self.update(SettingsUpdate::FontSize(FontLevel::from_input(raw)));
    }

    /// Rewrite the stored record to defaults and re-apply them from a clean slate.
    pub fn reset_to_defaults(&mut self) {
        if let Err(err) = self.store.reset() {
            log::warn!("could not reset stored settings: {err}");
        }

        if let Some(navbar) = self.surface.select_one(Hook::Navbar) {
            for class in RESET_NAVBAR_STRIP.iter() {
                self.surface.remove_class(&navbar, class);
            }
        }
        if let Some(body) = self.surface.select_one(Hook::Body) {
            self.surface.remove_class(&body, LEGACY_BODY_DARK);
        }
        if let Some(root) = self.surface.select_one(Hook::Root) {
            self.surface.remove_class(&root, DARK_MARKER);
        }

        self.apply_all(Settings::default());

        if let Some(cta) = self.surface.select_one(Hook::PrimaryCta) {
            for class in RESET_CTA_STRIP.iter() {
                self.surface.remove_class(&cta, class);
            }
            for class in CTA_DEFAULT {
                self.surface.add_class(&cta, class);
            }
        }
        applicator::preserve_drawer(&self.surface);
        log::info!("customization reset to defaults");
    }

    fn apply_all(&mut self, settings: Settings) {
        self.settings = settings;
        applicator::apply_settings(&self.surface, &settings, self.system.prefers_dark());
        self.sync_system_watch();
        self.sync_controls();
    }

    fn sync_system_watch(&mut self) {
        // Drop first so a replaced subscription never overlaps its successor.
        self.auto_watch = None;
        if self.settings.theme_mode != ThemeMode::Auto {
            return;
        }
        let surface = self.surface.clone();
        self.auto_watch = self.system.watch(Box::new(move |dark: bool| {
            applicator::apply_system_preference(&surface, dark);
        }));
        if self.auto_watch.is_none() {
            log::debug!("system theme changes are not observable; auto mode is static");
        }
    }

    fn sync_controls(&self) {
        self.mark_selected(Hook::ColorButtons, "color", self.settings.color_scheme.key());
        self.mark_selected(Hook::ModeButtons, "mode", self.settings.theme_mode.key());
        for (hook, checked) in [
            (Hook::StickyToggle, self.settings.sticky_header),
            (Hook::CompactToggle, self.settings.compact_sidebar),
            (Hook::FooterToggle, self.settings.show_footer),
        ] {
            if let Some(input) = self.surface.select_one(hook) {
                self.surface.set_checked(&input, checked);
            }
        }
        if let Some(slider) = self.surface.select_one(Hook::FontSlider) {
            self.surface
                .set_value(&slider, &self.settings.font_size.get().to_string());
        }
    }

    fn mark_selected(&self, hook: Hook, data_key: &str, selected: &str) {
        for button in self.surface.select(hook) {
            let on = self.surface.data(&button, data_key).as_deref() == Some(selected);
            ClassRule::toggle(hook, &SELECTED_RING, on)
                .diff()
                .apply_to(&self.surface, &button);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryPage, MemoryStorage, MemorySystemTheme};
    use crate::store::DEFAULT_STORAGE_KEY;

    type TestCustomizer = Customizer<MemoryPage, MemoryStorage, MemorySystemTheme>;

    fn customizer(system_dark: bool) -> (MemoryPage, MemoryStorage, MemorySystemTheme, TestCustomizer) {
        let page = MemoryPage::new();
        let storage = MemoryStorage::new();
        let system = MemorySystemTheme::new(system_dark);
        let c = Customizer::new(
            page.clone(),
            PreferenceStore::new(storage.clone(), DEFAULT_STORAGE_KEY),
            system.clone(),
        );
        (page, storage, system, c)
    }

    #[test]
    fn initialize_seeds_defaults_on_first_visit() {
        let (_, storage, _, mut c) = customizer(false);
        c.initialize();
        assert_eq!(c.settings(), Settings::default());
        assert!(storage.raw(DEFAULT_STORAGE_KEY).is_some());
    }

    #[test]
    fn selection_rings_follow_the_active_button() {
        let (page, _, _, mut c) = customizer(false);
        let blue = page.insert(&[Hook::ColorButtons], &[]);
        let red = page.insert(&[Hook::ColorButtons], &[]);
        page.set_data(blue, "color", "blue");
        page.set_data(red, "color", "red");

        c.initialize();
        assert!(page.has(blue, "ring-2"));
        assert!(!page.has(red, "ring-2"));

        c.select_color_key("red");
        assert!(!page.has(blue, "ring-offset-2"));
        assert_eq!(page.classes(red), vec!["ring-2", "ring-gray-500", "ring-offset-2"]);
    }

    #[test]
    fn unknown_keys_fall_back_to_defaults() {
        let (_, _, _, mut c) = customizer(false);
        c.initialize();
        c.select_color_key("green");
        c.select_color_key("mauve");
        c.select_mode_key("sepia");
        assert_eq!(c.settings().color_scheme, ColorScheme::Blue);
        assert_eq!(c.settings().theme_mode, ThemeMode::Light);
    }

    #[test]
    fn controls_reflect_loaded_settings() {
        let (page, _, _, mut c) = customizer(false);
        let sticky = page.insert(&[Hook::StickyToggle], &[]);
        let footer = page.insert(&[Hook::FooterToggle], &[]);
        let slider = page.insert(&[Hook::FontSlider], &[]);
        c.initialize();
        assert!(!page.node(sticky).checked);
        assert!(page.node(footer).checked);
        assert_eq!(page.node(slider).value, "3");

        c.set_font_input("4");
        c.update(SettingsUpdate::StickyHeader(true));
        assert_eq!(c.settings().font_size.get(), 4);
    }

    #[test]
    fn auto_watch_is_replaced_not_stacked() {
        let (_, _, system, mut c) = customizer(false);
        c.initialize();
        assert!(!c.is_watching_system());
        c.select_mode_key("auto");
        c.select_mode_key("auto");
        assert_eq!(system.watcher_count(), 1);
        c.select_mode_key("dark");
        assert_eq!(system.watcher_count(), 0);
    }

    #[test]
    fn storage_failure_still_applies_the_change() {
        let (page, storage, _, mut c) = customizer(false);
        let navbar = page.insert(&[Hook::Navbar], &["bg-blue-600"]);
        c.initialize();
        storage.fail_writes(true);
        c.select_color_key("indigo");
        assert!(page.has(navbar, "bg-indigo-600"));
        assert_eq!(c.settings().color_scheme, ColorScheme::Indigo);
    }
}
