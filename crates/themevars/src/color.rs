//! Hex color helpers.
//!
//! Theme values that look like `#RRGGBB` get an `R,G,B` companion property
//! so stylesheets can write `rgba(var(--rgb-accent), 0.5)`.
//!
//! ```rust
//! use themevars::color::{hex_to_rgb, is_hex_color};
//!
//! assert!(is_hex_color("#FF0000"));
//! assert_eq!(hex_to_rgb("#FF0000"), "255,0,0");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#[0-9a-f]{6}$").expect("static regex"));

/// An 8-bit RGB triple. Displays as `R,G,B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Takes the low three bytes of `value` as R, G, B.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Returns true for exactly `#` followed by six hex digits, any case.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Converts `#RRGGBB` into `"R,G,B"`.
///
/// The input is not validated. Everything after the first character is read
/// as a hexadecimal integer up to the first non-hex character (leading
/// whitespace, a sign and a `0x` prefix are accepted), wrapped to 32 bits,
/// and its low three bytes are returned. Malformed input therefore produces
/// a meaningless triple rather than an error; input without any digits
/// yields `"0,0,0"`. Use [`parse_hex_color`] when validation matters.
pub fn hex_to_rgb(hex: &str) -> String {
    Rgb::from_u32(lenient_hex_u32(hex)).to_string()
}

/// Strictly parses `#RGB` or `#RRGGBB`.
///
/// ```rust
/// use themevars::color::{Rgb, parse_hex_color};
///
/// assert_eq!(parse_hex_color("#0000ff"), Some(Rgb::new(0, 0, 255)));
/// assert_eq!(parse_hex_color("#fff"), Some(Rgb::new(255, 255, 255)));
/// assert_eq!(parse_hex_color("blue"), None);
/// ```
pub fn parse_hex_color(value: &str) -> Option<Rgb> {
    let s = value.trim().strip_prefix('#')?;
    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match s.len() {
        6 => u32::from_str_radix(s, 16).ok().map(Rgb::from_u32),
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

fn lenient_hex_u32(hex: &str) -> u32 {
    let mut chars = hex.chars().skip(1).peekable();
    while chars.next_if(|c| c.is_whitespace()).is_some() {}

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let rest: String = chars.collect();
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(&rest);

    let value = digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc.wrapping_mul(16).wrapping_add(d));

    if negative { value.wrapping_neg() } else { value }
}
