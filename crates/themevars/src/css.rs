//! CSS custom property naming.
//!
//! Theme keys are free-form, so they are sanitized before being used as
//! custom property names: every run of characters outside
//! `[0-9a-zA-Z-_]` collapses into a single separator.

use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

/// Separator used when none is given.
pub const DEFAULT_SPACING: &str = "-";

static INVALID_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9a-zA-Z\-_]+").expect("static regex"));

/// Which custom property a theme value maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VarKind {
    /// `--{param}`, holding the raw value.
    #[default]
    Normal,
    /// `--rgb-{param}`, holding the `R,G,B` triple of a hex color.
    Rgb,
}

impl VarKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Normal => "--",
            Self::Rgb => "--rgb-",
        }
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "NORMAL",
            Self::Rgb => "RGB",
        })
    }
}

/// Replaces each run of invalid characters in `param` with `spacing`.
///
/// Invalid characters in `spacing` are dropped first, so the result only
/// ever contains `[0-9a-zA-Z-_]`.
///
/// ```rust
/// use themevars::sanitize;
///
/// assert_eq!(sanitize("a.b c", "_"), "a_b_c");
/// assert_eq!(sanitize("a..b", "-"), "a-b");
/// assert_eq!(sanitize("a b", "."), "ab");
/// ```
pub fn sanitize<'a>(param: &'a str, spacing: &str) -> Cow<'a, str> {
    let spacing = INVALID_RUN.replace_all(spacing, "");
    INVALID_RUN.replace_all(param, regex::NoExpand(spacing.as_ref()))
}

/// Builds the custom property name for a theme key.
///
/// ```rust
/// use themevars::{VarKind, css_var_name};
///
/// assert_eq!(css_var_name("border-color", VarKind::Normal, "-"), "--border-color");
/// assert_eq!(css_var_name("border color", VarKind::Rgb, "-"), "--rgb-border-color");
/// ```
pub fn css_var_name(param: &str, kind: VarKind, spacing: &str) -> String {
    format!("{}{}", kind.prefix(), sanitize(param, spacing))
}
