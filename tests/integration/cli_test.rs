//! End-to-end tests for the tpanel binary.

use assert_cmd::Command;
use predicates::prelude::*;

/// A tpanel invocation isolated from any user config file.
fn tpanel() -> Command {
    let mut cmd = Command::cargo_bin("tpanel").unwrap();
    cmd.env("TPANEL_CONFIG", "/nonexistent/tpanel-test/config.toml");
    cmd
}

#[test]
fn panel_renders_at_fixed_width() {
    tpanel()
        .args(["panel", "--width", "20", "test"])
        .assert()
        .success()
        .stdout("╭──────────────────╮\n│ test             │\n╰──────────────────╯\n");
}

#[test]
fn panel_reads_content_from_stdin() {
    tpanel()
        .args(["panel", "--width", "20"])
        .write_stdin("test")
        .assert()
        .success()
        .stdout("╭──────────────────╮\n│ test             │\n╰──────────────────╯\n");
}

#[test]
fn titled_panel_keeps_the_title_visible() {
    tpanel()
        .args([
            "panel",
            "--width",
            "20",
            "--title",
            "title1",
            "--title-align",
            "left",
            "test",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("╭─ title1 ─────────╮"));
}

#[test]
fn params_renders_aligned_rows() {
    tpanel()
        .args(["params", "--width", "20", "x=10", "y=20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ x = 10           │"))
        .stdout(predicate::str::contains("│ y = 20           │"));
}

#[test]
fn params_masks_hidden_values() {
    tpanel()
        .args([
            "params",
            "--width",
            "40",
            "user=alice",
            "password=hunter2",
            "--hidden",
            "password",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("*****"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn params_accepts_a_json_object() {
    tpanel()
        .args(["params", "--width", "20", "--json", r#"{"b": 1, "a": 2}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ b = 1            │"));
}

#[test]
fn params_rejects_non_object_json() {
    tpanel()
        .args(["params", "--json", "[1, 2]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON object"));
}

#[test]
fn invalid_border_is_rejected() {
    tpanel()
        .args(["panel", "--width", "20", "--border", "╭╮", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid length for border"));
}

#[test]
fn ambiguous_default_style_is_rejected() {
    tpanel()
        .args(["panel", "--width", "20", "--title-style", "default", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous"));
}

#[test]
fn unknown_style_lists_alternatives() {
    tpanel()
        .args(["panel", "--width", "20", "--border-style", "sparkly", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid style value 'sparkly'"))
        .stderr(predicate::str::contains("bold"));
}

#[test]
fn width_too_small_is_rejected() {
    tpanel()
        .args(["panel", "--width", "4", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid width 4"));
}

#[test]
fn list_renders_with_count() {
    tpanel()
        .args(["list", "a", "b", "c", "--title", "Packages"])
        .assert()
        .success()
        .stdout("Packages (3): a  b  c\n");
}

#[test]
fn config_path_honors_the_env_override() {
    tpanel()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout("/nonexistent/tpanel-test/config.toml\n");
}

#[test]
fn config_show_prints_defaults_without_a_file() {
    tpanel()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("separator = \" = \""));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "width = 20\n").unwrap();

    let mut cmd = Command::cargo_bin("tpanel").unwrap();
    cmd.env("TPANEL_CONFIG", &path)
        .args(["panel", "test"])
        .assert()
        .success()
        .stdout("╭──────────────────╮\n│ test             │\n╰──────────────────╯\n");
}

#[test]
fn completions_generate_for_bash() {
    tpanel()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tpanel"));
}
