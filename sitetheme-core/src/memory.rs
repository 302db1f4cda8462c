//! In-memory stand-ins for the page, storage and system theme signal.
//!
//! These back the host-side tests and let the whole customizer run without a
//! browser. Clones share state, mirroring how every handle to the live
//! document sees the same tree.

use crate::store::{KeyValueStore, PrefsError};
use crate::surface::{Hook, PageSurface};
use crate::system::SystemTheme;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

pub type NodeId = usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNode {
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub data: BTreeMap<String, String>,
    pub checked: bool,
    pub value: String,
}

#[derive(Debug, Default)]
struct PageState {
    nodes: Vec<MemoryNode>,
    hooks: BTreeMap<Hook, Vec<NodeId>>,
}

/// A flat element list with explicit hook membership.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    inner: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    /// Page with a root (`html`) and a `body` element.
    #[must_use]
    pub fn new() -> Self {
        let page = Self::default();
        page.insert(&[Hook::Root], &[]);
        page.insert(&[Hook::Body], &[]);
        page
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.inner
            .borrow()
            .hooks
            .get(&Hook::Root)
            .and_then(|ids| ids.first().copied())
            .unwrap_or(0)
    }

    /// Add an element that the given hooks resolve to.
    pub fn insert(&self, hooks: &[Hook], classes: &[&str]) -> NodeId {
        let mut state = self.inner.borrow_mut();
        let id = state.nodes.len();
        state.nodes.push(MemoryNode {
            classes: classes.iter().map(ToString::to_string).collect(),
            ..MemoryNode::default()
        });
        for hook in hooks {
            state.hooks.entry(*hook).or_default().push(id);
        }
        id
    }

    pub fn set_data(&self, node: NodeId, key: &str, value: &str) {
        if let Some(n) = self.inner.borrow_mut().nodes.get_mut(node) {
            n.data.insert(key.to_string(), value.to_string());
        }
    }

    #[must_use]
    pub fn node(&self, node: NodeId) -> MemoryNode {
        self.inner.borrow().nodes.get(node).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn has(&self, node: NodeId, class: &str) -> bool {
        self.node(node).classes.contains(class)
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.node(node).classes.into_iter().collect()
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.node(node).styles.get(property).cloned()
    }

    /// Class lists of every element, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BTreeSet<String>> {
        self.inner.borrow().nodes.iter().map(|n| n.classes.clone()).collect()
    }

    fn with_node(&self, node: NodeId, f: impl FnOnce(&mut MemoryNode)) {
        if let Some(n) = self.inner.borrow_mut().nodes.get_mut(node) {
            f(n);
        }
    }
}

impl PageSurface for MemoryPage {
    type Node = NodeId;

    fn select(&self, hook: Hook) -> Vec<NodeId> {
        let state = self.inner.borrow();
        match hook {
            // Attribute-substring selectors match on class text, as the browser does.
            Hook::ColorText | Hook::HoverText => {
                let needle = if hook == Hook::ColorText { "text-" } else { "hover:text-" };
                state
                    .nodes
                    .iter()
                    .enumerate()
                    .filter(|(_, n)| n.classes.iter().any(|c| c.contains(needle)))
                    .map(|(id, _)| id)
                    .collect()
            }
            _ => state.hooks.get(&hook).cloned().unwrap_or_default(),
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.has(*node, class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        self.with_node(*node, |n| {
            n.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.with_node(*node, |n| {
            n.classes.remove(class);
        });
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.with_node(*node, |n| {
            n.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn data(&self, node: &NodeId, key: &str) -> Option<String> {
        self.node(*node).data.get(key).cloned()
    }

    fn set_checked(&self, node: &NodeId, checked: bool) {
        self.with_node(*node, |n| n.checked = checked);
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.with_node(*node, |n| n.value = value.to_string());
    }
}

/// `localStorage` double. `fail_writes` simulates a full or blocked store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        if self.fail_writes.get() {
            return Err(PrefsError::Storage("quota exceeded".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PrefsError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct SignalState {
    dark: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Controllable `prefers-color-scheme` signal.
#[derive(Clone, Default)]
pub struct MemorySystemTheme {
    inner: Rc<RefCell<SignalState>>,
}

impl MemorySystemTheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        let signal = Self::default();
        signal.inner.borrow_mut().dark = dark;
        signal
    }

    /// Flip the system preference and notify every live watcher.
    pub fn set_dark(&self, dark: bool) {
        let listeners: Vec<Listener> = {
            let mut state = self.inner.borrow_mut();
            state.dark = dark;
            state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(dark);
        }
    }

    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Unsubscribes its listener when dropped.
pub struct MemoryWatch {
    id: u64,
    signal: Weak<RefCell<SignalState>>,
}

impl Drop for MemoryWatch {
    fn drop(&mut self) {
        if let Some(signal) = self.signal.upgrade() {
            signal.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl SystemTheme for MemorySystemTheme {
    type Watch = MemoryWatch;

    fn prefers_dark(&self) -> bool {
        self.inner.borrow().dark
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Option<MemoryWatch> {
        let mut state = self.inner.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Rc::from(on_change)));
        Some(MemoryWatch {
            id,
            signal: Rc::downgrade(&self.inner),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_tree() {
        let page = MemoryPage::new();
        let other = page.clone();
        let nav = page.insert(&[Hook::Navbar], &["flex"]);
        other.add_class(&nav, "bg-red-600");
        assert!(page.has(nav, "bg-red-600"));
    }

    #[test]
    fn text_hooks_match_class_substrings() {
        let page = MemoryPage::new();
        let a = page.insert(&[], &["text-blue-600"]);
        let b = page.insert(&[], &["hover:text-blue-500"]);
        let c = page.insert(&[], &["font-bold"]);
        assert_eq!(page.select(Hook::ColorText), vec![a, b]);
        assert_eq!(page.select(Hook::HoverText), vec![b]);
        assert!(!page.select(Hook::ColorText).contains(&c));
    }

    #[test]
    fn dropped_watch_stops_receiving() {
        let signal = MemorySystemTheme::new(false);
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let watch = signal.watch(Box::new(move |_: bool| seen.set(seen.get() + 1)));
        signal.set_dark(true);
        drop(watch);
        signal.set_dark(false);
        assert_eq!(hits.get(), 1);
        assert_eq!(signal.watcher_count(), 0);
    }
}
