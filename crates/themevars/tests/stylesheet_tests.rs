//! Integration tests for loading theme files and publishing them as custom
//! properties.

use themevars::{
    Animation, AnimationDirection, ApplyConfig, PropertyMap, ThemeRegistry, TimingFunction,
    Transition,
};

const DRACULA: &str = "tests/fixtures/dracula.json";
const NORD: &str = "tests/fixtures/nord.toml";

fn loaded_registry() -> ThemeRegistry {
    let mut registry = ThemeRegistry::new();
    assert!(registry.load_theme_file(DRACULA, true).expect("load dracula"));
    assert!(registry.load_theme_file(NORD, false).expect("load nord"));
    registry
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn files_are_appended_in_order() {
    let registry = loaded_registry();
    let names: Vec<&str> = registry.themes().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["Dracula", "Nord"]);
    assert_eq!(registry.selected_index(), Some(0));
}

#[test]
fn toml_numbers_are_stringified() {
    let registry = loaded_registry();
    assert_eq!(registry.find("Nord").unwrap().get("spacing"), Some("8"));
}

#[test]
fn json_export_matches_source_document() {
    let registry = loaded_registry();
    let exported: serde_json::Value =
        serde_json::from_str(&registry.theme_to_json(Some("Dracula"))).unwrap();
    let source: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(DRACULA).unwrap()).unwrap();
    assert_eq!(exported, source);
}

// =============================================================================
// Stylesheets
// =============================================================================

#[test]
fn dracula_stylesheet_snapshot() {
    let mut registry = loaded_registry();
    registry.set_theme_transition(
        "fade",
        &Transition::new(0.25).timing(TimingFunction::EaseInOut),
        None,
    );
    registry.set_theme_animation(
        "pulse",
        &Animation::new()
            .name("pulse")
            .duration(1.5)
            .direction(AnimationDirection::Alternate),
        Some("Dracula"),
    );

    let css = registry.render_stylesheet(None, &ApplyConfig::new());
    insta::assert_snapshot!("dracula_root", css);
}

#[test]
fn named_theme_with_custom_selector() {
    let registry = loaded_registry();
    let css = registry.render_stylesheet(
        Some("Nord"),
        &ApplyConfig::new().selector("[data-theme=\"nord\"]"),
    );
    assert!(css.starts_with("[data-theme=\"nord\"] {\n"));
    assert!(css.contains("  --accent: #88c0d0;\n"));
    assert!(css.contains("  --rgb-accent: 136,192,208;\n"));
    assert!(css.contains("  --spacing: 8;\n"));
    assert!(!css.contains("--name"));
}

#[test]
fn switching_themes_overwrites_sink() {
    let mut registry = loaded_registry();
    let mut props = PropertyMap::new();
    registry.apply_theme(None, "-", &mut props);
    assert_eq!(props.get("--background"), Some("#282a36"));

    registry.set_current_theme("Nord");
    registry.apply_theme(None, "-", &mut props);
    assert_eq!(props.get("--background"), Some("#2e3440"));
    assert_eq!(props.get("--rgb-background"), Some("46,52,64"));
    // Keys only Dracula defines stay behind, as on a real element.
    assert_eq!(props.get("--radius"), Some("6px"));
}

#[test]
fn underscore_spacing() {
    let registry = loaded_registry();
    let props = registry.theme_properties(Some("Dracula"), "_");
    let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
    assert!(names.contains(&"--font_family"));
    assert!(names.contains(&"--shadow_color"));
}
