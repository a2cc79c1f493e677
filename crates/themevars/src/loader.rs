//! Reading theme documents.
//!
//! The loader only turns text into a [`serde_json::Value`]; it performs no
//! schema checks. Whether the value becomes a theme is decided by
//! [`ThemeRegistry::load_theme`](crate::ThemeRegistry::load_theme).

use crate::theme::ThemeLoadError;
use serde_json::Value;
use std::fmt;
#[cfg(feature = "native")]
use std::fs;
#[cfg(feature = "native")]
use std::path::Path;
use tracing::trace;

/// Supported theme document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeFormat {
    Json,
    Toml,
    Yaml,
}

impl ThemeFormat {
    /// Picks a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        })
    }
}

/// Parses a theme document.
///
/// # Errors
/// Returns `ThemeLoadError` if the text is not valid for `format`, or
/// `UnsupportedFormat` for YAML without the `yaml` feature.
pub fn parse_theme_str(text: &str, format: ThemeFormat) -> Result<Value, ThemeLoadError> {
    trace!(theme.format = %format, theme.bytes = text.len(), "Parsing theme document");
    match format {
        ThemeFormat::Json => Ok(serde_json::from_str(text)?),
        ThemeFormat::Toml => Ok(toml::from_str(text)?),
        ThemeFormat::Yaml => {
            #[cfg(feature = "yaml")]
            {
                Ok(serde_yaml::from_str(text)?)
            }
            #[cfg(not(feature = "yaml"))]
            {
                Err(ThemeLoadError::UnsupportedFormat("yaml".into()))
            }
        }
    }
}

/// Reads and parses a theme file, choosing the format by extension.
///
/// # Errors
/// Returns `ThemeLoadError` if reading or parsing fails, or if the
/// extension is not one of `json`, `toml`, `yaml`, `yml`.
///
/// # Availability
/// This function is only available with the `native` feature (not on WASM).
#[cfg(feature = "native")]
pub fn read_theme_file(path: impl AsRef<Path>) -> Result<Value, ThemeLoadError> {
    let path = path.as_ref();
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ThemeFormat::from_extension(ext)
            .ok_or_else(|| ThemeLoadError::UnsupportedFormat(ext.into()))?,
        None => return Err(ThemeLoadError::UnsupportedFormat("unknown".into())),
    };
    let content = fs::read_to_string(path)?;
    parse_theme_str(&content, format)
}
