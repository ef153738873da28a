//! Integration tests for the anime-presenter binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::temp_fixture;

/// anime-presenter with colors disabled and an isolated config location.
fn presenter() -> Command {
    let mut cmd = Command::cargo_bin("anime-presenter").expect("binary should be built");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    presenter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("outline"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn show_without_markup_file_is_usage_error() {
    presenter()
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<MARKUP_FILE>"));
}

// ============================================================================
// Outline Tests
// ============================================================================

#[test]
fn outline_prints_every_slide() {
    let (_dir, path) = temp_fixture("positive_case.yaml");
    let output = presenter()
        .arg("outline")
        .arg(&path)
        .output()
        .expect("Failed to run anime-presenter");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout, @r"
    My Awesome Presentation
    5 slides, 2 sections

      1  1/1          0  Section 1. Introduction | Slide 1. Title
      2  1/2        100  Section 1. Introduction | Slide 2.
      3  2/1        200  Section 2. | Slide 1.
      4  2/2        300  Section 2. | Slide 2.
      5  2/3        450  Section 2. | Slide 3. End
    ");
}

#[test]
fn outline_json_is_machine_readable() {
    let (dir, path) = temp_fixture("positive_case.yaml");
    let output = presenter()
        .args(["outline", "--json"])
        .arg(&path)
        .output()
        .expect("Failed to run anime-presenter");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "My Awesome Presentation");
    assert_eq!(json["mute_audio"], true);
    assert_eq!(
        json["src"].as_str().unwrap(),
        dir.path().join("video.mp4").to_str().unwrap()
    );

    let slides = json["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 5);
    assert_eq!(slides[4]["slide_title"], "Slide 3. End");
    assert_eq!(slides[4]["offset"], 450);
}

#[test]
fn outline_reports_markup_errors_in_a_panel() {
    let (_dir, path) = temp_fixture("non_increasing.yaml");
    presenter()
        .arg("outline")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("MarkupError"))
        .stderr(predicate::str::contains("Slide offsets should increase"));
}

#[test]
fn outline_reports_missing_video() {
    let (_dir, path) = temp_fixture("missing_video.yaml");
    presenter()
        .arg("outline")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not-there.mp4"));
}

#[test]
fn outline_rejects_deck_without_slides() {
    let (_dir, path) = temp_fixture("no_slides.yaml");
    presenter()
        .arg("outline")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("At least one slide is required"));
}

#[test]
fn outline_missing_file_fails() {
    presenter()
        .args(["outline", "does-not-exist.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.yaml"));
}

// ============================================================================
// Show Tests
// ============================================================================

#[test]
fn show_refuses_non_terminal_stdout() {
    let (_dir, path) = temp_fixture("positive_case.yaml");
    presenter()
        .arg("show")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("terminal"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_honors_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    presenter()
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_show_prints_defaults_for_missing_file() {
    let dir = TempDir::new().unwrap();
    presenter()
        .args(["config", "show", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("redraw_passes = 6"));
}

#[test]
fn config_show_reads_override_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[player]\nredraw_passes = 2\n").unwrap();

    presenter()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("redraw_passes = 2"))
        .stdout(predicate::str::contains("frame_wait_ms = 16"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[player]\npreview_fps = 0.0\n").unwrap();

    presenter()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    presenter()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anime-presenter"));
}
