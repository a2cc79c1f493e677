//! End-to-end integration tests for the themevars CLI.
//!
//! These run the real binary against the fixture themes and check what ends
//! up on stdout, stderr and in the exit code.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const DRACULA: &str = "tests/fixtures/dracula.json";
const NORD: &str = "tests/fixtures/nord.toml";

/// Get a Command for the themevars binary with a clean environment.
#[allow(deprecated)]
fn themevars_cmd() -> Command {
    let mut cmd = Command::cargo_bin("themevars").unwrap();
    cmd.env_remove("THEMEVARS_SPACING").env_remove("RUST_LOG");
    cmd
}

fn temp_theme(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// =============================================================================
// css
// =============================================================================

mod css {
    use super::*;

    #[test]
    fn test_first_file_renders_as_root() {
        themevars_cmd()
            .args(["css", DRACULA, NORD])
            .assert()
            .success()
            .stdout(
                ":root {\n  \
                 --background: #282a36;\n  \
                 --rgb-background: 40,42,54;\n  \
                 --foreground: #f8f8f2;\n  \
                 --rgb-foreground: 248,248,242;\n  \
                 --accent: #BD93F9;\n  \
                 --rgb-accent: 189,147,249;\n  \
                 --radius: 6px;\n  \
                 --font-family: JetBrains Mono;\n  \
                 --shadow-color: #00000080;\n\
                 }\n",
            );
    }

    #[test]
    fn test_theme_flag_selects_by_name() {
        themevars_cmd()
            .args(["css", DRACULA, NORD, "--theme", "Nord"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--background: #2e3440;"))
            .stdout(predicate::str::contains("--spacing: 8;"))
            .stdout(predicate::str::contains("#282a36").not());
    }

    #[test]
    fn test_selector_and_no_rgb() {
        themevars_cmd()
            .args(["css", NORD, "--selector", ".nord", "--no-rgb"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(".nord {\n"))
            .stdout(predicate::str::contains("--rgb-").not());
    }

    #[test]
    fn test_spacing_flag() {
        themevars_cmd()
            .args(["css", DRACULA, "--spacing", "_"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--font_family: JetBrains Mono;"))
            .stdout(predicate::str::contains("--shadow_color: #00000080;"));
    }

    #[test]
    fn test_spacing_from_env() {
        themevars_cmd()
            .env("THEMEVARS_SPACING", "_")
            .args(["css", DRACULA])
            .assert()
            .success()
            .stdout(predicate::str::contains("--font_family"));
    }

    #[test]
    fn test_unknown_theme_fails() {
        themevars_cmd()
            .args(["css", DRACULA, "--theme", "Solarized"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("theme not found: Solarized"));
    }
}

// =============================================================================
// json
// =============================================================================

mod json {
    use super::*;

    #[test]
    fn test_json_matches_source() {
        let output = themevars_cmd()
            .args(["json", DRACULA])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let exported: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let source: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(DRACULA).unwrap()).unwrap();
        assert_eq!(exported, source);
    }

    #[test]
    fn test_json_is_compact_by_default() {
        themevars_cmd()
            .args(["json", NORD])
            .assert()
            .success()
            .stdout(
                "{\"name\":\"Nord\",\"background\":\"#2e3440\",\"foreground\":\"#eceff4\",\
                 \"accent\":\"#88c0d0\",\"spacing\":\"8\"}\n",
            );
    }

    #[test]
    fn test_json_pretty() {
        themevars_cmd()
            .args(["json", NORD, "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{\n  \"name\": \"Nord\",\n"));
    }

    #[test]
    fn test_json_named_theme() {
        themevars_cmd()
            .args(["json", DRACULA, NORD, "-t", "Nord"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"name\":\"Nord\""));
    }

    #[test]
    fn test_json_unresolved_exits_one() {
        themevars_cmd()
            .args(["json", DRACULA, "--theme", "Missing"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty());
    }
}

// =============================================================================
// vars
// =============================================================================

mod vars {
    use super::*;

    #[test]
    fn test_plain_name() {
        themevars_cmd()
            .args(["vars", "font size"])
            .assert()
            .success()
            .stdout("--font-size\n");
    }

    #[test]
    fn test_rgb_name() {
        themevars_cmd()
            .args(["vars", "button.bg", "--rgb"])
            .assert()
            .success()
            .stdout("--rgb-button-bg\n");
    }

    #[test]
    fn test_custom_spacing() {
        themevars_cmd()
            .args(["vars", "a b.c", "--spacing", "__"])
            .assert()
            .success()
            .stdout("--a__b__c\n");
    }
}

// =============================================================================
// Error handling
// =============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_file_not_found() {
        themevars_cmd()
            .args(["css", "does-not-exist.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load does-not-exist.json"));
    }

    #[test]
    fn test_invalid_json_reports_cause() {
        let file = temp_theme(".json", "{ \"name\": ");
        themevars_cmd()
            .args(["css"])
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("caused by: JSON error"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.ini");
        std::fs::write(&path, "name=Ini").unwrap();
        themevars_cmd()
            .args(["css"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsupported format"));
    }

    #[test]
    fn test_empty_document_warns_and_fails() {
        let file = temp_theme(".json", "null");
        themevars_cmd()
            .args(["css"])
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Skipping empty theme file"))
            .stderr(predicate::str::contains("no theme loaded"));
    }

    #[test]
    fn test_missing_subcommand() {
        themevars_cmd().assert().failure();
    }
}

// =============================================================================
// Logging
// =============================================================================

mod logging {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        themevars_cmd()
            .args(["css", DRACULA])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        themevars_cmd()
            .args(["-v", "css", DRACULA])
            .assert()
            .success()
            .stderr(predicate::str::contains("Theme added"))
            .stdout(predicate::str::starts_with(":root {"));
    }
}
