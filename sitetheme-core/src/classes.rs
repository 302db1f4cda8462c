//! Remove-then-add class transforms.
//!
//! Each setting is described as a list of [`ClassRule`]s: a family of classes
//! the setting may ever apply to a hook, and the subset that is selected
//! now. [`apply_rules`] is the only place that edits class lists for settings.

use crate::surface::{Hook, PageSurface};
use std::collections::BTreeSet;

/// Classes to strip and classes to add on one element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDiff<'a> {
    pub remove: BTreeSet<&'a str>,
    pub add: BTreeSet<&'a str>,
}

/// Diff that leaves exactly `selected` out of `options` on an element.
///
/// A selected class is never in `remove`, so applying the diff cannot drop
/// a class it is about to (re)add.
#[must_use]
pub fn derive_classes<'a>(options: &[&'a str], selected: &[&'a str]) -> ClassDiff<'a> {
    let add: BTreeSet<&str> = selected.iter().copied().collect();
    let remove = options
        .iter()
        .copied()
        .filter(|class| !add.contains(class))
        .collect();
    ClassDiff { remove, add }
}

impl ClassDiff<'_> {
    /// Apply to one node: every removal first, then every addition.
    pub fn apply_to<S: PageSurface>(&self, surface: &S, node: &S::Node) {
        for class in &self.remove {
            surface.remove_class(node, class);
        }
        for class in &self.add {
            surface.add_class(node, class);
        }
    }

    fn touches<S: PageSurface>(&self, surface: &S, node: &S::Node) -> bool {
        self.remove
            .iter()
            .chain(self.add.iter())
            .any(|class| surface.has_class(node, class))
    }
}

/// Which matched elements a rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every element the hook resolves to.
    Always,
    /// Only elements already carrying a class from the rule's family.
    IfPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRule<'a> {
    pub hook: Hook,
    pub family: &'a [&'a str],
    pub selected: &'a [&'a str],
    pub scope: Scope,
}

impl<'a> ClassRule<'a> {
    #[must_use]
    pub const fn swap(hook: Hook, family: &'a [&'a str], selected: &'a [&'a str]) -> Self {
        Self {
            hook,
            family,
            selected,
            scope: Scope::Always,
        }
    }

    #[must_use]
    pub const fn replace(hook: Hook, family: &'a [&'a str], selected: &'a [&'a str]) -> Self {
        Self {
            hook,
            family,
            selected,
            scope: Scope::IfPresent,
        }
    }

    /// Adds or strips `classes` as a unit.
    #[must_use]
    pub const fn toggle(hook: Hook, classes: &'a [&'a str], on: bool) -> Self {
        Self::swap(hook, classes, if on { classes } else { &[] })
    }

    #[must_use]
    pub fn diff(&self) -> ClassDiff<'a> {
        derive_classes(self.family, self.selected)
    }
}

/// Inline style assignment on every element of a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub hook: Hook,
    pub property: &'static str,
    pub value: &'static str,
}

impl StyleRule {
    #[must_use]
    pub const fn new(hook: Hook, property: &'static str, value: &'static str) -> Self {
        Self {
            hook,
            property,
            value,
        }
    }
}

pub fn apply_rules<S: PageSurface>(surface: &S, rules: &[ClassRule<'_>]) {
    for rule in rules {
        let diff = rule.diff();
        for node in surface.select(rule.hook) {
            if rule.scope == Scope::IfPresent && !diff.touches(surface, &node) {
                continue;
            }
            diff.apply_to(surface, &node);
        }
    }
}

pub fn apply_styles<S: PageSurface>(surface: &S, rules: &[StyleRule]) {
    for rule in rules {
        for node in surface.select(rule.hook) {
            surface.set_style(&node, rule.property, rule.value);
        }
    }
}
