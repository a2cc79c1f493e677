//! The theme registry.
//!
//! [`ThemeRegistry`] keeps themes in creation order together with the
//! currently selected one. Every lookup that cannot be resolved, such as
//! writing to the current theme while nothing is selected or naming a theme
//! that does not exist, is a silent no-op. Methods report whether they did
//! anything through their return value; ignoring it gives the permissive
//! behavior.
//!
//! # Example
//!
//! ```rust
//! use themevars::{ThemeRegistry, TimingFunction, Transition};
//! use themevars::sink::PropertyMap;
//!
//! let mut registry = ThemeRegistry::new();
//! registry.create_theme("Dark", true);
//! registry.set_theme_value("accent", "#7c3aed", None);
//! registry.set_theme_transition("fade", &Transition::new(0.2).timing(TimingFunction::Ease), None);
//!
//! let mut props = PropertyMap::new();
//! registry.apply_theme(None, "-", &mut props);
//! assert_eq!(props.get("--accent"), Some("#7c3aed"));
//! assert_eq!(props.get("--rgb-accent"), Some("124,58,237"));
//! assert_eq!(props.get("--fade"), Some("0.2s ease 0s"));
//! ```

use crate::color::{hex_to_rgb, is_hex_color};
use crate::css::{VarKind, css_var_name};
use crate::format::{Animation, Transition};
use crate::sink::{ApplyConfig, CssProperty, PropertyMap, StyleSink};
use crate::theme::{NAME_KEY, Theme, ThemeLoadError, is_truthy};
use serde_json::Value;
#[cfg(feature = "native")]
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, trace, warn};

static EMPTY_THEME: LazyLock<Theme> = LazyLock::new(Theme::empty);

/// A theme without a `name` key never matches, not even `""`.
fn is_named(theme: &Theme, name: &str) -> bool {
    theme.get(NAME_KEY) == Some(name)
}

/// Ordered collection of themes plus the selected one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    selected: Option<usize>,
}

impl ThemeRegistry {
    /// Creates an empty registry with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// All themes, in creation order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Index of the selected theme.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Returns the selected theme, or an empty theme when nothing is
    /// selected.
    pub fn current_theme(&self) -> &Theme {
        self.selected
            .and_then(|i| self.themes.get(i))
            .unwrap_or(&*EMPTY_THEME)
    }

    /// Mutable access to the selected theme.
    pub fn current_theme_mut(&mut self) -> Option<&mut Theme> {
        self.selected.and_then(|i| self.themes.get_mut(i))
    }

    /// First theme whose `name` equals `name`.
    pub fn find(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| is_named(t, name))
    }

    /// Mutable form of [`ThemeRegistry::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Theme> {
        self.themes.iter_mut().find(|t| is_named(t, name))
    }

    /// Resolves a target: the named theme when `name` is non-empty, the
    /// selected theme otherwise.
    pub fn resolve(&self, name: Option<&str>) -> Option<&Theme> {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => self.find(name),
            None => self.selected.and_then(|i| self.themes.get(i)),
        }
    }

    /// Mutable form of [`ThemeRegistry::resolve`].
    pub fn resolve_mut(&mut self, name: Option<&str>) -> Option<&mut Theme> {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => self.find_mut(name),
            None => self.current_theme_mut(),
        }
    }

    /// Selects the first theme named `name`.
    ///
    /// When no theme matches, the selection is cleared. Returns the new
    /// selection.
    pub fn set_current_theme(&mut self, name: &str) -> Option<usize> {
        self.selected = self.themes.iter().position(|t| is_named(t, name));
        match self.selected {
            Some(index) => debug!(theme.name = %name, theme.index = index, "Theme selected"),
            None => debug!(theme.name = %name, "No theme matched; selection cleared"),
        }
        self.selected
    }

    /// Appends a theme containing only `name`.
    pub fn create_theme(&mut self, name: impl Into<String>, set_current: bool) {
        self.push(Theme::new(name), set_current);
    }

    /// Appends `theme` as is.
    pub fn add_theme(&mut self, theme: Theme, set_current: bool) {
        self.push(theme, set_current);
    }

    /// Removes every theme and clears the selection.
    pub fn clear(&mut self) {
        debug!(theme.count = self.themes.len(), "Theme registry cleared");
        self.themes.clear();
        self.selected = None;
    }

    /// Appends an externally supplied theme object.
    ///
    /// Any truthy value is accepted and coerced with
    /// [`Theme::from_value`]; no schema is enforced. Falsy values (`null`,
    /// `false`, `0`, `""`) are rejected and nothing is appended.
    pub fn load_theme(&mut self, candidate: &Value, set_current: bool) -> bool {
        if !is_truthy(candidate) {
            warn!(theme.candidate = %candidate, "Rejected empty theme candidate");
            return false;
        }
        self.push(Theme::from_value(candidate), set_current);
        true
    }

    /// Reads a theme file and passes it to [`ThemeRegistry::load_theme`].
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if reading or parsing fails. A document that
    /// parses to a falsy value is `Ok(false)`.
    ///
    /// # Availability
    /// This method is only available with the `native` feature (not on WASM).
    #[cfg(feature = "native")]
    pub fn load_theme_file(
        &mut self,
        path: impl AsRef<Path>,
        set_current: bool,
    ) -> Result<bool, ThemeLoadError> {
        let path = path.as_ref();
        let value = crate::loader::read_theme_file(path)?;
        debug!(theme.path = %path.display(), "Theme file read");
        Ok(self.load_theme(&value, set_current))
    }

    /// Parses `json` and passes it to [`ThemeRegistry::load_theme`].
    ///
    /// # Errors
    /// Returns `ThemeLoadError::Json` if `json` is not valid JSON.
    pub fn load_theme_json(&mut self, json: &str, set_current: bool) -> Result<bool, ThemeLoadError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(self.load_theme(&value, set_current))
    }

    /// Writes `value` under `key` in the named theme, or in the selected
    /// theme when `theme_name` is `None` or empty.
    ///
    /// Returns false, changing nothing, when the target cannot be resolved.
    pub fn set_theme_value(
        &mut self,
        key: &str,
        value: impl Into<String>,
        theme_name: Option<&str>,
    ) -> bool {
        let Some(theme) = self.resolve_mut(theme_name) else {
            trace!(theme.key = %key, theme.target = ?theme_name, "No theme to write to");
            return false;
        };
        let value = value.into();
        trace!(theme.name = %theme.name(), theme.key = %key, theme.value = %value, "Theme value set");
        theme.set(key, value);
        true
    }

    /// Formats `transition` and stores it under `key`.
    ///
    /// Same target resolution as [`ThemeRegistry::set_theme_value`].
    pub fn set_theme_transition(
        &mut self,
        key: &str,
        transition: &Transition,
        theme_name: Option<&str>,
    ) -> bool {
        self.set_theme_value(key, transition.to_css(), theme_name)
    }

    /// Formats `animation` and stores it under `key`.
    ///
    /// Same target resolution as [`ThemeRegistry::set_theme_value`].
    pub fn set_theme_animation(
        &mut self,
        key: &str,
        animation: &Animation,
        theme_name: Option<&str>,
    ) -> bool {
        self.set_theme_value(key, animation.to_css(), theme_name)
    }

    /// Serializes the named theme (or the selected one) as compact JSON.
    ///
    /// Returns an empty string when the theme cannot be resolved.
    pub fn theme_to_json(&self, theme_name: Option<&str>) -> String {
        self.resolve(theme_name)
            .and_then(|theme| serde_json::to_string(theme).ok())
            .unwrap_or_default()
    }

    /// Computes the custom properties for a theme without applying them.
    ///
    /// Every key except `name` yields `--{key}`; values that are `#RRGGBB`
    /// colors also yield `--rgb-{key}`. An unresolvable theme yields
    /// nothing.
    pub fn theme_properties(&self, theme_name: Option<&str>, spacing: &str) -> Vec<CssProperty> {
        let mut props = Vec::new();
        self.apply_theme(theme_name, spacing, &mut props);
        props
    }

    /// Sets the theme's custom properties on `sink`.
    ///
    /// See [`ThemeRegistry::theme_properties`] for what is emitted.
    pub fn apply_theme<S>(&self, theme_name: Option<&str>, spacing: &str, sink: &mut S)
    where
        S: StyleSink + ?Sized,
    {
        self.apply_with(theme_name, spacing, true, sink);
    }

    /// Renders the theme as a CSS rule according to `config`.
    pub fn render_stylesheet(&self, theme_name: Option<&str>, config: &ApplyConfig) -> String {
        let mut props = PropertyMap::new();
        self.apply_with(
            theme_name,
            config.spacing_str(),
            config.rgb_variants_enabled(),
            &mut props,
        );
        props.to_css_block(config.selector_str())
    }

    fn apply_with<S>(&self, theme_name: Option<&str>, spacing: &str, rgb: bool, sink: &mut S)
    where
        S: StyleSink + ?Sized,
    {
        let theme = self.resolve(theme_name).unwrap_or(&*EMPTY_THEME);
        debug!(theme.name = %theme.name(), theme.keys = theme.len(), "Applying theme");
        for (key, value) in theme.iter().filter(|(key, _)| key.as_str() != NAME_KEY) {
            sink.set_property(&css_var_name(key, VarKind::Normal, spacing), value);
            if rgb && is_hex_color(value) {
                sink.set_property(&css_var_name(key, VarKind::Rgb, spacing), &hex_to_rgb(value));
            }
        }
    }

    fn push(&mut self, theme: Theme, set_current: bool) {
        debug!(theme.name = %theme.name(), theme.index = self.themes.len(), "Theme added");
        self.themes.push(theme);
        if set_current {
            self.selected = Some(self.themes.len() - 1);
        }
    }
}
