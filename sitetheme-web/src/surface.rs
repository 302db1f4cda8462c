use sitetheme_core::{Hook, PageSurface};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, NodeList};

/// [`PageSurface`] over the live browser document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveDocument {
    document: Document,
}

impl LiveDocument {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    #[must_use]
    pub fn current() -> Option<Self> {
        crate::dom::document().map(Self::new)
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                log::debug!(
                    "selector {selector} failed: {}",
                    crate::dom::js_error_message(&err)
                );
                Vec::new()
            }
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl PageSurface for LiveDocument {
    type Node = Element;

    fn select(&self, hook: Hook) -> Vec<Element> {
        match hook {
            Hook::Root => self.document.document_element().into_iter().collect(),
            Hook::Body => self
                .document
                .body()
                .map(Element::from)
                .into_iter()
                .collect(),
            _ if hook.is_singular() => self
                .document
                .query_selector(hook.selector())
                .ok()
                .flatten()
                .into_iter()
                .collect(),
            _ => self.query_all(hook.selector()),
        }
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn data(&self, node: &Element, key: &str) -> Option<String> {
        node.get_attribute(&format!("data-{key}"))
    }

    fn set_checked(&self, node: &Element, checked: bool) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }
}
