//! Dropdown and mobile submenu visibility.
//!
//! Visibility lives on the elements themselves as a `hidden`/`block` class
//! pair. Button-triggered dropdowns are mutually exclusive; mobile accordion
//! submenus toggle independently.

use crate::surface::{Hook, PageSurface};

pub const HIDDEN_CLASS: &str = "hidden";
pub const VISIBLE_CLASS: &str = "block";
pub const ROTATED_CLASS: &str = "rotate-180";
/// Toggle control inside a mobile submenu item; the submenu is its next sibling.
pub const SUBMENU_TOGGLE: &str = ".submenu-toggle";
pub const SUBMENU_ICON: &str = "svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Open,
    Closed,
}

impl DropdownState {
    #[must_use]
    pub fn of<S: PageSurface>(surface: &S, content: &S::Node) -> Self {
        if surface.has_class(content, HIDDEN_CLASS) {
            Self::Closed
        } else {
            Self::Open
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

pub fn set_dropdown<S: PageSurface>(surface: &S, content: &S::Node, state: DropdownState) {
    match state {
        DropdownState::Open => {
            surface.remove_class(content, HIDDEN_CLASS);
            surface.add_class(content, VISIBLE_CLASS);
        }
        DropdownState::Closed => {
            surface.add_class(content, HIDDEN_CLASS);
            surface.remove_class(content, VISIBLE_CLASS);
        }
    }
}

/// Handle a click on the button that owns `content`.
///
/// Every other dropdown closes first, so at most one stays open.
pub fn toggle_dropdown<S: PageSurface>(surface: &S, content: &S::Node) -> DropdownState {
    let next = DropdownState::of(surface, content).flipped();
    for other in surface.select(Hook::DropdownContent) {
        if other != *content {
            set_dropdown(surface, &other, DropdownState::Closed);
        }
    }
    set_dropdown(surface, content, next);
    next
}

/// Close every dropdown, as a click outside all of them does.
pub fn close_all_dropdowns<S: PageSurface>(surface: &S) {
    for content in surface.select(Hook::DropdownContent) {
        set_dropdown(surface, &content, DropdownState::Closed);
    }
}

/// Flip one mobile accordion submenu and rotate its chevron.
///
/// Returns whether the submenu is now open.
pub fn toggle_submenu<S: PageSurface>(
    surface: &S,
    submenu: &S::Node,
    icon: Option<&S::Node>,
) -> bool {
    let open = surface.has_class(submenu, HIDDEN_CLASS);
    if open {
        surface.remove_class(submenu, HIDDEN_CLASS);
    } else {
        surface.add_class(submenu, HIDDEN_CLASS);
    }
    if let Some(icon) = icon {
        if surface.has_class(icon, ROTATED_CLASS) {
            surface.remove_class(icon, ROTATED_CLASS);
        } else {
            surface.add_class(icon, ROTATED_CLASS);
        }
    }
    open
}
