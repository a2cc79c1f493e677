//! Style-property sinks.
//!
//! Applying a theme only computes custom property names and values; where
//! they end up is decided by a [`StyleSink`]:
//! - **[`PropertyMap`]**: in-memory, renders to a CSS rule block
//! - **closures**: any `FnMut(&str, &str)`
//! - **DOM**: `document.documentElement.style` (in `themevars-wasm`)
//!
//! # Example
//!
//! ```rust
//! use themevars::sink::{PropertyMap, StyleSink};
//!
//! let mut props = PropertyMap::new();
//! props.set_property("--accent", "#7c3aed");
//! props.set_property("--rgb-accent", "124,58,237");
//!
//! assert_eq!(
//!     props.to_css_block(":root"),
//!     ":root {\n  --accent: #7c3aed;\n  --rgb-accent: 124,58,237;\n}\n"
//! );
//! ```

use crate::css::DEFAULT_SPACING;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Anything that can receive "set custom property `name` to `value`".
pub trait StyleSink {
    /// Sets (or overwrites) a property.
    fn set_property(&mut self, name: &str, value: &str);
}

impl<F> StyleSink for F
where
    F: FnMut(&str, &str),
{
    fn set_property(&mut self, name: &str, value: &str) {
        self(name, value);
    }
}

/// A computed custom property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CssProperty {
    pub name: String,
    pub value: String,
}

impl CssProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl StyleSink for Vec<CssProperty> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.push(CssProperty::new(name, value));
    }
}

/// Ordered property store with overwrite semantics, like an element's
/// inline style declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    props: IndexMap<String, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates properties in first-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Removes every property.
    pub fn clear(&mut self) {
        self.props.clear();
    }

    /// Renders the properties as a CSS rule.
    ///
    /// An empty map renders `"{selector} {\n}\n"`.
    pub fn to_css_block(&self, selector: &str) -> String {
        let mut out = String::with_capacity(selector.len() + 4 + self.props.len() * 24);
        let _ = writeln!(out, "{selector} {{");
        for (name, value) in &self.props {
            let _ = writeln!(out, "  {name}: {value};");
        }
        out.push_str("}\n");
        out
    }
}

impl StyleSink for PropertyMap {
    fn set_property(&mut self, name: &str, value: &str) {
        self.props.insert(name.to_string(), value.to_string());
    }
}

impl From<Vec<CssProperty>> for PropertyMap {
    fn from(props: Vec<CssProperty>) -> Self {
        let mut map = Self::new();
        for prop in props {
            map.props.insert(prop.name, prop.value);
        }
        map
    }
}

/// Settings for turning a theme into custom properties.
///
/// Defaults:
/// - spacing `"-"`
/// - selector `":root"`
/// - `--rgb-*` companions enabled
///
/// # Example
///
/// ```rust
/// use themevars::ApplyConfig;
///
/// let config = ApplyConfig::new()
///     .spacing("_")
///     .selector("[data-theme]")
///     .rgb_variants(false);
/// assert_eq!(config.spacing_str(), "_");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyConfig {
    spacing: String,
    selector: String,
    rgb_variants: bool,
}

impl ApplyConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self {
            spacing: DEFAULT_SPACING.to_string(),
            selector: ":root".to_string(),
            rgb_variants: true,
        }
    }

    /// Sets the replacement for invalid name characters.
    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Sets the selector used when rendering a stylesheet.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Enables or disables the `--rgb-*` companion properties.
    pub fn rgb_variants(mut self, enabled: bool) -> Self {
        self.rgb_variants = enabled;
        self
    }

    pub fn spacing_str(&self) -> &str {
        &self.spacing
    }

    pub fn selector_str(&self) -> &str {
        &self.selector
    }

    pub fn rgb_variants_enabled(&self) -> bool {
        self.rgb_variants
    }
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self::new()
    }
}
