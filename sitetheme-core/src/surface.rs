//! The page contract: which element groups are touched and how they are reached.
//!
//! Everything that reads or writes the page goes through [`PageSurface`], so the
//! same applicator code drives the live document in the browser and
//! [`crate::memory::MemoryPage`] in host tests.

/// A named group of page elements, resolved through its CSS selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hook {
    Root,
    Body,
    Navbar,
    NavLinks,
    MobileMenuButton,
    CustomizeButton,
    PrimaryCta,
    AccentButtons,
    ColorText,
    HoverText,
    DarkFooter,
    FooterHeadings,
    Icons,
    NewsCardText,
    Cards,
    Sidebar,
    Footer,
    Drawer,
    DrawerText,
    DrawerHeader,
    DrawerBody,
    ColorButtons,
    ModeButtons,
    StickyToggle,
    CompactToggle,
    FooterToggle,
    FontSlider,
    ResetButton,
    CloseButton,
    DropdownButtons,
    DropdownContent,
    DropdownRoot,
    SubmenuItems,
}

impl Hook {
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Root => "html",
            Self::Body => "body",
            Self::Navbar => "#navbar",
            Self::NavLinks => "#navbar a",
            Self::MobileMenuButton => ".mobile-menu-button",
            Self::CustomizeButton => ".customize-button",
            Self::PrimaryCta => "#primary-cta",
            Self::AccentButtons => ".college-btn",
            Self::ColorText => "[class*=\"text-\"]",
            Self::HoverText => "[class*=\"hover:text-\"]",
            Self::DarkFooter => ".footer-dark",
            Self::FooterHeadings => "#footer-info h3",
            Self::Icons => "svg",
            Self::NewsCardText => ".news-card .text-gray-700",
            Self::Cards => ".program-card, .news-card",
            Self::Sidebar => "#sidebar",
            Self::Footer => "footer",
            Self::Drawer => "#customizationDrawer",
            Self::DrawerText => {
                "#customizationDrawer h5, #customizationDrawer h6, #customizationDrawer label, #customizationDrawer span"
            }
            Self::DrawerHeader => "#customizationDrawer .offcanvas-header",
            Self::DrawerBody => "#customizationDrawer .offcanvas-body",
            Self::ColorButtons => ".color-scheme-btn",
            Self::ModeButtons => ".theme-mode-btn",
            Self::StickyToggle => "#stickyHeader",
            Self::CompactToggle => "#compactSidebar",
            Self::FooterToggle => "#showFooter",
            Self::FontSlider => "#fontSizeSlider",
            Self::ResetButton => "#resetCustomization",
            Self::CloseButton => ".btn-close",
            Self::DropdownButtons => ".dropdown-button",
            Self::DropdownContent => ".dropdown-content",
            Self::DropdownRoot => ".dropdown",
            Self::SubmenuItems => "#mobile-menu .has-submenu",
        }
    }

    /// Whether the group is expected to hold a single element.
    #[must_use]
    pub const fn is_singular(self) -> bool {
        matches!(
            self,
            Self::Root
                | Self::Body
                | Self::Navbar
                | Self::MobileMenuButton
                | Self::CustomizeButton
                | Self::PrimaryCta
                | Self::DarkFooter
                | Self::Sidebar
                | Self::Footer
                | Self::Drawer
                | Self::DrawerHeader
                | Self::DrawerBody
                | Self::StickyToggle
                | Self::CompactToggle
                | Self::FooterToggle
                | Self::FontSlider
                | Self::ResetButton
                | Self::CloseButton
        )
    }
}

/// DOM-like access to the page.
///
/// Methods take `&self` because the underlying document is shared and
/// mutated in place, as the browser DOM is. A hook with no matching elements
/// yields an empty selection and every caller treats that as a no-op.
pub trait PageSurface {
    type Node: Clone + PartialEq;

    fn select(&self, hook: Hook) -> Vec<Self::Node>;

    /// First element for `hook`, matching `querySelector` semantics.
    fn select_one(&self, hook: Hook) -> Option<Self::Node> {
        self.select(hook).into_iter().next()
    }

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Value of the node's `data-{key}` attribute.
    fn data(&self, node: &Self::Node, key: &str) -> Option<String>;

    fn set_checked(&self, node: &Self::Node, checked: bool);
    fn set_value(&self, node: &Self::Node, value: &str);
}

#[cfg(test)]
mod tests {
    use super::Hook;

    #[test]
    fn singular_hooks_use_id_or_single_tag_selectors() {
        for hook in [Hook::Navbar, Hook::PrimaryCta, Hook::Drawer, Hook::FontSlider] {
            assert!(hook.is_singular());
            assert!(!hook.selector().contains(','));
        }
        assert!(!Hook::Cards.is_singular());
    }

    #[test]
    fn drawer_text_selector_is_scoped_to_the_drawer() {
        for part in Hook::DrawerText.selector().split(", ") {
            assert!(part.starts_with("#customizationDrawer "));
        }
    }
}
