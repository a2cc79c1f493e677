//! JavaScript-facing wrappers around the theme registry and shorthands.
//!
//! Keyword arguments (`"ease-in"`, `"alternate"`, ...) use the CSS spelling.
//! Theme names are optional everywhere; `undefined` means the current theme.

use serde_json::Value;
use themevars::{
    Animation, AnimationDirection, DEFAULT_SPACING, FillMode, IterationCount, PlayState,
    ThemeRegistry, TimingFunction, Transition, VarKind,
};
use wasm_bindgen::prelude::*;

use crate::dom::DomStyleSink;

fn parse_keyword<T: serde::de::DeserializeOwned>(keyword: &str) -> Result<T, JsValue> {
    serde_json::from_value(Value::from(keyword))
        .map_err(|_| JsValue::from_str(&format!("unknown keyword: {keyword}")))
}

/// Converts a JS value to JSON data the registry understands.
///
/// `undefined` is treated like `null`.
fn js_to_json(value: &JsValue) -> Result<Value, JsValue> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    let text = String::from(js_sys::JSON::stringify(value)?);
    serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Create an empty theme registry.
#[wasm_bindgen(js_name = "newRegistry")]
pub fn new_registry() -> JsThemeRegistry {
    JsThemeRegistry::new()
}

/// JavaScript-friendly wrapper for [`ThemeRegistry`].
#[wasm_bindgen(js_name = "ThemeRegistry")]
#[derive(Clone, Debug, Default)]
pub struct JsThemeRegistry {
    inner: ThemeRegistry,
}

#[wasm_bindgen(js_class = "ThemeRegistry")]
impl JsThemeRegistry {
    /// Create an empty registry.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered themes.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Name of the current theme, or `""` when none is selected.
    #[wasm_bindgen(js_name = "currentThemeName")]
    pub fn current_theme_name(&self) -> String {
        self.inner.current_theme().name().to_string()
    }

    /// Names of all themes in creation order.
    #[wasm_bindgen(js_name = "themeNames")]
    pub fn theme_names(&self) -> Vec<JsValue> {
        self.inner
            .themes()
            .iter()
            .map(|theme| JsValue::from_str(theme.name()))
            .collect()
    }

    /// Select the first theme called `name`. Returns false if none matches.
    #[wasm_bindgen(js_name = "setCurrentTheme")]
    pub fn set_current_theme(&mut self, name: &str) -> bool {
        self.inner.set_current_theme(name).is_some()
    }

    /// Append a theme holding only its name.
    #[wasm_bindgen(js_name = "createTheme")]
    pub fn create_theme(&mut self, name: &str, set_current: bool) {
        self.inner.create_theme(name, set_current);
    }

    /// Append any truthy JS value as a theme.
    #[wasm_bindgen(js_name = "loadTheme")]
    pub fn load_theme(&mut self, theme: &JsValue, set_current: bool) -> Result<bool, JsValue> {
        let value = js_to_json(theme)?;
        Ok(self.inner.load_theme(&value, set_current))
    }

    /// Parse `json` and append it as a theme.
    #[wasm_bindgen(js_name = "loadThemeJson")]
    pub fn load_theme_json(&mut self, json: &str, set_current: bool) -> Result<bool, JsValue> {
        self.inner
            .load_theme_json(json, set_current)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Write one parameter into a theme.
    #[wasm_bindgen(js_name = "setThemeValue")]
    pub fn set_theme_value(&mut self, key: &str, value: &str, theme_name: Option<String>) -> bool {
        self.inner
            .set_theme_value(key, value, theme_name.as_deref())
    }

    /// Write a transition shorthand into a theme.
    #[wasm_bindgen(js_name = "setThemeTransition")]
    pub fn set_theme_transition(
        &mut self,
        key: &str,
        transition: &JsTransition,
        theme_name: Option<String>,
    ) -> bool {
        self.inner
            .set_theme_transition(key, &transition.inner, theme_name.as_deref())
    }

    /// Write an animation shorthand into a theme.
    #[wasm_bindgen(js_name = "setThemeAnimation")]
    pub fn set_theme_animation(
        &mut self,
        key: &str,
        animation: &JsAnimation,
        theme_name: Option<String>,
    ) -> bool {
        self.inner
            .set_theme_animation(key, &animation.inner, theme_name.as_deref())
    }

    /// Compact JSON for a theme, or `""` when it cannot be resolved.
    #[wasm_bindgen(js_name = "themeToJson")]
    pub fn theme_to_json(&self, theme_name: Option<String>) -> String {
        self.inner.theme_to_json(theme_name.as_deref())
    }

    /// Set the theme's custom properties on `document.documentElement`.
    #[wasm_bindgen(js_name = "applyTheme")]
    pub fn apply_theme(
        &self,
        theme_name: Option<String>,
        spacing: Option<String>,
    ) -> Result<(), JsValue> {
        let mut sink = DomStyleSink::document_root()?;
        self.apply_to(&mut sink, theme_name.as_deref(), spacing.as_deref());
        Ok(())
    }

    /// Set the theme's custom properties on `element`.
    #[wasm_bindgen(js_name = "applyThemeTo")]
    pub fn apply_theme_to(
        &self,
        element: &web_sys::HtmlElement,
        theme_name: Option<String>,
        spacing: Option<String>,
    ) {
        let mut sink = DomStyleSink::new(element);
        self.apply_to(&mut sink, theme_name.as_deref(), spacing.as_deref());
    }

    /// Render the theme as a `:root` rule.
    #[wasm_bindgen(js_name = "renderStylesheet")]
    pub fn render_stylesheet(&self, theme_name: Option<String>, spacing: Option<String>) -> String {
        let config = themevars::ApplyConfig::new()
            .spacing(spacing.unwrap_or_else(|| DEFAULT_SPACING.to_string()));
        self.inner.render_stylesheet(theme_name.as_deref(), &config)
    }

    /// Remove every theme and clear the selection.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl JsThemeRegistry {
    fn apply_to(&self, sink: &mut DomStyleSink, theme_name: Option<&str>, spacing: Option<&str>) {
        self.inner
            .apply_theme(theme_name, spacing.unwrap_or(DEFAULT_SPACING), sink);
    }

    /// Returns the wrapped registry.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.inner
    }
}

/// JavaScript-friendly wrapper for [`Transition`].
///
/// Methods return a new `Transition` for chaining.
#[wasm_bindgen(js_name = "Transition")]
#[derive(Clone, Debug)]
pub struct JsTransition {
    inner: Transition,
}

#[wasm_bindgen(js_class = "Transition")]
impl JsTransition {
    /// Create a transition lasting `duration` seconds.
    #[wasm_bindgen(constructor)]
    pub fn new(duration: f64) -> Self {
        Self {
            inner: Transition::new(duration),
        }
    }

    /// Set the easing keyword, e.g. `"ease-in-out"`.
    pub fn timing(self, keyword: &str) -> Result<JsTransition, JsValue> {
        let timing: TimingFunction = parse_keyword(keyword)?;
        Ok(Self {
            inner: self.inner.timing(timing),
        })
    }

    /// Use `cubic-bezier(x1,y1,x2,y2)`.
    #[wasm_bindgen(js_name = "cubicBezier")]
    pub fn cubic_bezier(self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            inner: self.inner.cubic_bezier(x1, y1, x2, y2),
        }
    }

    /// Delay in seconds.
    pub fn delay(self, delay: f64) -> Self {
        Self {
            inner: self.inner.delay(delay),
        }
    }

    /// The `transition` shorthand value.
    #[wasm_bindgen(js_name = "toCss")]
    pub fn to_css(&self) -> String {
        self.inner.to_css()
    }
}

/// JavaScript-friendly wrapper for [`Animation`].
///
/// Methods return a new `Animation` for chaining.
#[wasm_bindgen(js_name = "Animation")]
#[derive(Clone, Debug, Default)]
pub struct JsAnimation {
    inner: Animation,
}

#[wasm_bindgen(js_class = "Animation")]
impl JsAnimation {
    /// Create an animation with every field unset.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyframes name.
    pub fn name(self, name: &str) -> Self {
        Self {
            inner: self.inner.name(name),
        }
    }

    /// Duration in seconds.
    pub fn duration(self, duration: f64) -> Self {
        Self {
            inner: self.inner.duration(duration),
        }
    }

    /// Delay in seconds.
    pub fn delay(self, delay: f64) -> Self {
        Self {
            inner: self.inner.delay(delay),
        }
    }

    /// Easing keyword, e.g. `"linear"`.
    pub fn timing(self, keyword: &str) -> Result<JsAnimation, JsValue> {
        let timing: TimingFunction = parse_keyword(keyword)?;
        Ok(Self {
            inner: self.inner.timing(timing),
        })
    }

    /// Use `cubic-bezier(x1,y1,x2,y2)`.
    #[wasm_bindgen(js_name = "cubicBezier")]
    pub fn cubic_bezier(self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            inner: self.inner.cubic_bezier(x1, y1, x2, y2),
        }
    }

    /// `animation-direction` keyword.
    pub fn direction(self, keyword: &str) -> Result<JsAnimation, JsValue> {
        let direction: AnimationDirection = parse_keyword(keyword)?;
        Ok(Self {
            inner: self.inner.direction(direction),
        })
    }

    /// `animation-fill-mode` keyword.
    #[wasm_bindgen(js_name = "fillMode")]
    pub fn fill_mode(self, keyword: &str) -> Result<JsAnimation, JsValue> {
        let fill_mode: FillMode = parse_keyword(keyword)?;
        Ok(Self {
            inner: self.inner.fill_mode(fill_mode),
        })
    }

    /// `animation-play-state` keyword.
    #[wasm_bindgen(js_name = "playState")]
    pub fn play_state(self, keyword: &str) -> Result<JsAnimation, JsValue> {
        let play_state: PlayState = parse_keyword(keyword)?;
        Ok(Self {
            inner: self.inner.play_state(play_state),
        })
    }

    /// Repeat `count` times. Zero means forever.
    #[wasm_bindgen(js_name = "iterationCount")]
    pub fn iteration_count(self, count: u32) -> Self {
        Self {
            inner: self.inner.iteration_count(count),
        }
    }

    /// Repeat forever.
    pub fn infinite(self) -> Self {
        Self {
            inner: self.inner.iteration_count(IterationCount::Infinite),
        }
    }

    /// The `animation` shorthand value.
    #[wasm_bindgen(js_name = "toCss")]
    pub fn to_css(&self) -> String {
        self.inner.to_css()
    }
}

/// Custom property name for a theme parameter.
#[wasm_bindgen(js_name = "cssVarName")]
pub fn css_var_name(param: &str, rgb: bool, spacing: Option<String>) -> String {
    let kind = if rgb { VarKind::Rgb } else { VarKind::Normal };
    themevars::css_var_name(param, kind, spacing.as_deref().unwrap_or(DEFAULT_SPACING))
}

/// `"r,g,b"` for a `#RRGGBB` color.
#[wasm_bindgen(js_name = "hexToRgb")]
pub fn hex_to_rgb(hex: &str) -> String {
    themevars::hex_to_rgb(hex)
}

/// Whether `value` is a `#RRGGBB` color.
#[wasm_bindgen(js_name = "isHexColor")]
pub fn is_hex_color(value: &str) -> bool {
    themevars::is_hex_color(value)
}
