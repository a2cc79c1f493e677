//! # themevars-wasm
//!
//! Theme registry for the browser, compiled to WebAssembly.
//!
//! Applying a theme writes its parameters as CSS custom properties onto
//! `document.documentElement`, so stylesheets can use `var(--background)`
//! and `rgba(var(--rgb-background), 0.5)`.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { ThemeRegistry, Transition } from 'themevars-wasm';
//!
//! async function main() {
//!     await init();
//!
//!     const registry = new ThemeRegistry();
//!     registry.loadTheme({ name: "Dracula", background: "#282a36" }, true);
//!     registry.setThemeTransition("fade", new Transition(0.25).timing("ease-out"));
//!     registry.applyTheme();
//! }
//!
//! main();
//! ```
//!
//! ## Available APIs
//!
//! ### Registry
//!
//! - `ThemeRegistry` / `newRegistry()` - Themes, selection and application
//! - `applyTheme(name?, spacing?)` - Write properties onto the document root
//! - `applyThemeTo(element, name?, spacing?)` - Write properties onto an element
//!
//! ### Shorthands
//!
//! - `Transition` - Chainable `transition` value builder
//! - `Animation` - Chainable `animation` value builder
//!
//! ### Utilities
//!
//! - `cssVarName(param, rgb, spacing?)` - Custom property name for a parameter
//! - `hexToRgb(hex)` - `"r,g,b"` for a hex color
//! - `isHexColor(value)` - Whether a value gets an `--rgb-*` companion

#![forbid(unsafe_code)]

// Use wee_alloc for smaller binaries (optional)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub mod bindings;
pub mod dom;

use wasm_bindgen::prelude::*;

pub use bindings::{
    JsAnimation, JsThemeRegistry, JsTransition, css_var_name, hex_to_rgb, is_hex_color,
    new_registry,
};
pub use dom::DomStyleSink;

/// Installs the panic hook when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if the module is properly initialized.
#[must_use]
#[wasm_bindgen(js_name = "isReady")]
#[allow(clippy::missing_const_for_fn)] // wasm_bindgen doesn't support const fn
pub fn is_ready() -> bool {
    true
}
