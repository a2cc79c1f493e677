//! The theme value map.
//!
//! A [`Theme`] is an ordered mapping from style parameter names to CSS value
//! strings. The `name` key identifies the theme inside a
//! [`ThemeRegistry`](crate::ThemeRegistry); it is a convention, not a schema,
//! so nothing stops two themes from sharing a name or a theme from having no
//! name at all.
//!
//! # Example
//!
//! ```rust
//! use themevars::Theme;
//!
//! let theme = Theme::new("Dark")
//!     .with_value("background", "#1e1e2e")
//!     .with_value("radius", "4px");
//!
//! assert_eq!(theme.name(), "Dark");
//! assert_eq!(theme.get("background"), Some("#1e1e2e"));
//! assert_eq!(theme.len(), 3);
//! ```

use crate::format::css_number;
use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "native")]
use std::fs;
#[cfg(feature = "native")]
use std::path::Path;
use thiserror::Error;

/// Key holding the theme's identifier.
pub const NAME_KEY: &str = "name";

/// An ordered map of style parameters.
///
/// Insertion order is preserved for iteration, serialization and theme
/// application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    values: IndexMap<String, String>,
}

impl Theme {
    /// Creates a theme containing only the `name` key.
    pub fn new(name: impl Into<String>) -> Self {
        let mut values = IndexMap::new();
        values.insert(NAME_KEY.to_string(), name.into());
        Self { values }
    }

    /// Creates a theme with no keys at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the theme name, or `""` when the theme has none.
    pub fn name(&self) -> &str {
        self.get(NAME_KEY).unwrap_or_default()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Sets `key` to `value`, returning the previous value.
    ///
    /// Overwriting keeps the key at its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Builder form of [`Theme::set`].
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.values.iter()
    }

    /// Number of keys, `name` included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the theme has no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coerces an arbitrary JSON value into a theme.
    ///
    /// Follows object-entries semantics: objects contribute their entries,
    /// arrays and strings contribute index-keyed entries, and any other
    /// scalar contributes nothing. Non-string values are stringified the way
    /// a browser would (`true`, `null`, `1.5`); nested structures become
    /// compact JSON.
    ///
    /// Every stored value is a string afterwards, `name` included: a theme
    /// loaded from `{"name": 5}` is named `"5"` and is found by that string.
    pub fn from_value(value: &Value) -> Self {
        let values = match value {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), stringify_value(v)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), stringify_value(v)))
                .collect(),
            Value::String(s) => s
                .chars()
                .enumerate()
                .map(|(i, c)| (i.to_string(), c.to_string()))
                .collect(),
            Value::Null | Value::Bool(_) | Value::Number(_) => IndexMap::new(),
        };
        Self { values }
    }

    /// Serialize this theme to pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `ThemeSaveError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ThemeSaveError> {
        serde_json::to_string_pretty(self).map_err(ThemeSaveError::Json)
    }

    /// Serialize this theme to TOML.
    ///
    /// # Errors
    /// Returns `ThemeSaveError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ThemeSaveError> {
        toml::to_string_pretty(self).map_err(ThemeSaveError::Toml)
    }

    /// Serialize this theme to YAML.
    ///
    /// # Errors
    /// Returns `ThemeSaveError` if serialization fails.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String, ThemeSaveError> {
        serde_yaml::to_string(self).map_err(ThemeSaveError::Yaml)
    }

    /// Save this theme to a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `ThemeSaveError` if serialization or writing fails.
    ///
    /// # Availability
    /// This method is only available with the `native` feature (not on WASM).
    #[cfg(feature = "native")]
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ThemeSaveError> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|e| e.to_str()) {
            Some("json") | None => self.to_json()?,
            Some("toml") => self.to_toml()?,
            Some("yaml" | "yml") => {
                #[cfg(feature = "yaml")]
                {
                    self.to_yaml()?
                }
                #[cfg(not(feature = "yaml"))]
                {
                    return Err(ThemeSaveError::UnsupportedFormat("yaml".into()));
                }
            }
            Some(ext) => return Err(ThemeSaveError::UnsupportedFormat(ext.into())),
        };

        fs::write(path, content).map_err(ThemeSaveError::Io)
    }
}

impl<K, V> FromIterator<(K, V)> for Theme
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Theme {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for Theme {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Returns false for the values a permissive loader treats as "nothing".
///
/// `null`, `false`, `0` and `""` are falsy; every object and array, even an
/// empty one, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_f64() {
                n.as_f64().map_or_else(|| n.to_string(), css_number)
            } else {
                n.to_string()
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Error loading a theme.
#[derive(Error, Debug)]
pub enum ThemeLoadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Error saving a theme.
#[derive(Error, Debug)]
pub enum ThemeSaveError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
