//! Process-wide registry.
//!
//! Applications that want a single shared registry instead of passing a
//! [`ThemeRegistry`] around can use this one. It starts empty; call
//! [`reset_global_registry`] to return it to that state.
//!
//! Each call runs under one lock, so "append then select" inside a single
//! closure is never observed half-done.
//!
//! ```rust
//! use themevars::global::{reset_global_registry, with_global_registry};
//!
//! with_global_registry(|registry| registry.create_theme("Shared", true));
//! let name = with_global_registry(|registry| registry.current_theme().name().to_string());
//! assert_eq!(name, "Shared");
//! reset_global_registry();
//! ```

use crate::registry::ThemeRegistry;
use std::sync::{LazyLock, PoisonError, RwLock};
use tracing::debug;

static GLOBAL_REGISTRY: LazyLock<RwLock<ThemeRegistry>> =
    LazyLock::new(|| RwLock::new(ThemeRegistry::new()));

/// Runs `f` with exclusive access to the global registry.
pub fn with_global_registry<R>(f: impl FnOnce(&mut ThemeRegistry) -> R) -> R {
    let mut guard = GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Runs `f` with shared access to the global registry.
pub fn read_global_registry<R>(f: impl FnOnce(&ThemeRegistry) -> R) -> R {
    let guard = GLOBAL_REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Clears the global registry.
pub fn reset_global_registry() {
    debug!("Global theme registry reset");
    with_global_registry(ThemeRegistry::clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global is shared by every test in this binary; keep all checks in
    // one test so they cannot interleave.
    #[test]
    fn test_global_registry_lifecycle() {
        reset_global_registry();
        with_global_registry(|r| {
            r.create_theme("G1", true);
            r.set_theme_value("gap", "2px", None);
        });
        let json = read_global_registry(|r| r.theme_to_json(Some("G1")));
        assert_eq!(json, r#"{"name":"G1","gap":"2px"}"#);

        reset_global_registry();
        read_global_registry(|r| {
            assert!(r.is_empty());
            assert_eq!(r.selected_index(), None);
        });
    }
}
