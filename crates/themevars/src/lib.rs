#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::new_without_default)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]
#![allow(clippy::iter_without_into_iter)]

//! # Themevars
//!
//! An in-memory theme registry that publishes themes as CSS custom
//! properties.
//!
//! Themevars provides:
//! - **Themes**: ordered string maps of style parameters, identified by `name`
//! - **Registry**: creation order, a selected theme, permissive lookups
//! - **Shorthands**: `transition` and `animation` values built from typed fields
//! - **Custom properties**: sanitized `--name` / `--rgb-name` pairs for hex colors
//!
//! ## Quick Start
//!
//! ```rust
//! use themevars::{ApplyConfig, ThemeRegistry};
//!
//! let mut registry = ThemeRegistry::new();
//! registry.create_theme("Dracula", true);
//! registry.set_theme_value("background", "#282a36", None);
//! registry.set_theme_value("font size", "14px", None);
//!
//! let css = registry.render_stylesheet(None, &ApplyConfig::new());
//! assert_eq!(
//!     css,
//!     ":root {\n  --background: #282a36;\n  --rgb-background: 40,42,54;\n  --font-size: 14px;\n}\n"
//! );
//! ```
//!
//! ## Loading Themes
//!
//! Theme documents are accepted without a schema. Anything that is not
//! `null`, `false`, `0` or `""` becomes a theme:
//!
//! ```rust
//! use themevars::ThemeRegistry;
//! use serde_json::json;
//!
//! let mut registry = ThemeRegistry::new();
//! assert!(registry.load_theme(&json!({"name": "BlueTheme", "color": "#0000FF"}), true));
//! assert!(!registry.load_theme(&json!(null), true));
//! assert_eq!(registry.theme_to_json(Some("BlueTheme")), r##"{"name":"BlueTheme","color":"#0000FF"}"##);
//! ```
//!
//! ## Shorthands
//!
//! ```rust
//! use themevars::Transition;
//!
//! let t = Transition::new(2).cubic_bezier(1.0, 0.0, 1.0, 0.0).delay(0.5);
//! assert_eq!(t.to_string(), "2s cubic-bezier(1,0,1,0) 0.5s");
//! ```

pub mod color;
pub mod css;
pub mod format;
pub mod global;
pub mod loader;
pub mod registry;
pub mod sink;
pub mod theme;

// Re-exports
pub use color::{Rgb, hex_to_rgb, is_hex_color, parse_hex_color};
pub use css::{DEFAULT_SPACING, VarKind, css_var_name, sanitize};
pub use format::{
    Animation, AnimationDirection, FillMode, IterationCount, PlayState, TimingFunction, Transition,
};
pub use global::{read_global_registry, reset_global_registry, with_global_registry};
#[cfg(feature = "native")]
pub use loader::read_theme_file;
pub use loader::{ThemeFormat, parse_theme_str};
pub use registry::ThemeRegistry;
pub use sink::{ApplyConfig, CssProperty, PropertyMap, StyleSink};
pub use theme::{NAME_KEY, Theme, ThemeLoadError, ThemeSaveError, is_truthy};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::css::{VarKind, css_var_name};
    pub use crate::format::{
        Animation, AnimationDirection, FillMode, IterationCount, PlayState, TimingFunction,
        Transition,
    };
    pub use crate::registry::ThemeRegistry;
    pub use crate::sink::{ApplyConfig, PropertyMap, StyleSink};
    pub use crate::theme::Theme;
}
