//! Style sink backed by an element's inline style.

use themevars::StyleSink;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, HtmlElement, console};

/// Writes custom properties with `CSSStyleDeclaration.setProperty`.
///
/// Properties land on the element's inline style, so they cascade to every
/// descendant through `var(--name)`.
#[derive(Debug, Clone)]
pub struct DomStyleSink {
    style: CssStyleDeclaration,
}

impl DomStyleSink {
    /// Targets the inline style of `element`.
    pub fn new(element: &HtmlElement) -> Self {
        Self {
            style: element.style(),
        }
    }

    /// Targets an arbitrary declaration block, such as a stylesheet rule's
    /// `style`.
    pub fn from_declaration(style: CssStyleDeclaration) -> Self {
        Self { style }
    }

    /// Targets `document.documentElement`, which is what `:root` matches.
    ///
    /// # Errors
    ///
    /// Fails outside a browser document, or when the root is not an HTML
    /// element.
    pub fn document_root() -> Result<Self, JsValue> {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or_else(|| JsValue::from_str("no document element"))?;
        let root = root
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("document element is not an HTML element"))?;
        Ok(Self::new(&root))
    }

    /// Reads a property back, or `""` when unset.
    pub fn get_property(&self, name: &str) -> String {
        self.style.get_property_value(name).unwrap_or_default()
    }
}

impl StyleSink for DomStyleSink {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Err(err) = self.style.set_property(name, value) {
            console::warn_2(&JsValue::from_str(&format!("setProperty({name}) failed:")), &err);
        }
    }
}
