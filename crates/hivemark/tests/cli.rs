//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

// =============================================================================
// Style Command
// =============================================================================

#[test]
fn style_bolds_exclaimed_word() {
    cmd()
        .args(["style", "Stop!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<strong>Stop!</strong>"));
}

#[test]
fn style_bolds_lead_in_through_colon() {
    cmd()
        .args(["style", "Breaking: news happened"])
        .assert()
        .success()
        .stdout(predicate::str::diff("<strong>Breaking:</strong> news happened\n"));
}

#[test]
fn style_strips_disallowed_markup() {
    cmd()
        .args(["style", "<a href=\"https://example.com\">WOW</a>"])
        .assert()
        .success()
        .stdout(predicate::str::diff("<strong>WOW</strong>\n"));
}

#[test]
fn style_sanitize_only_skips_rules() {
    cmd()
        .args(["style", "--sanitize-only", "THIS IS LOUD"])
        .assert()
        .success()
        .stdout(predicate::str::diff("THIS IS LOUD\n"));
}

#[test]
fn style_reads_title_from_file() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "Really?\n").unwrap();
    cmd()
        .args(["style", "--file", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<strong>Really?</strong>"));
}

#[test]
fn style_json_reports_change() {
    let output = cmd()
        .args(["--json", "style", "NEWS: big"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["input"], "NEWS: big");
    assert!(json["changed"].as_bool().unwrap());
    assert!(json["output"].as_str().unwrap().contains("<strong>"));
}

#[test]
fn style_title_and_file_conflict() {
    cmd()
        .args(["style", "Hello", "--file", "whatever.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn style_without_input_fails() {
    cmd()
        .arg("style")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file"));
}

// =============================================================================
// Sanitize Command
// =============================================================================

#[test]
fn sanitize_keeps_allowed_tags() {
    cmd()
        .args(["sanitize", "<strong>hi</strong> <em>there</em>"])
        .assert()
        .success()
        .stdout(predicate::str::diff("<strong>hi</strong> <em>there</em>\n"));
}

#[test]
fn sanitize_strips_attributes_and_wrappers() {
    cmd()
        .args(["sanitize", "<div class=\"x\"><b id=\"y\">bold</b></div>"])
        .assert()
        .success()
        .stdout(predicate::str::diff("<b>bold</b>\n"));
}

#[test]
fn sanitize_never_applies_styling_rules() {
    cmd()
        .args(["sanitize", "LOUD TITLE!"])
        .assert()
        .success()
        .stdout(predicate::str::diff("LOUD TITLE!\n"));
}

// =============================================================================
// Embeds Command
// =============================================================================

#[test]
fn embeds_lists_media_in_document_order() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        tmp.path(),
        "<video src=\"a.mp4\"></video><p>mid</p><iframe src=\"b\"></iframe>",
    )
    .unwrap();
    let output = cmd()
        .args(["--json", "embeds", tmp.path().to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list[0].as_str().unwrap().starts_with("<video"));
    assert!(list[1].as_str().unwrap().starts_with("<iframe"));
}

#[test]
fn embeds_type_filter_narrows_results() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        tmp.path(),
        "<video src=\"a.mp4\"></video><iframe src=\"b\"></iframe>",
    )
    .unwrap();
    cmd()
        .args([
            "embeds",
            tmp.path().to_str().unwrap(),
            "--types",
            "iframe",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<iframe"))
        .stdout(predicate::str::contains("<video").not());
}

#[test]
fn embeds_first_truncates_output() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        tmp.path(),
        "<video src=\"a.mp4\"></video><iframe src=\"b\"></iframe>",
    )
    .unwrap();
    cmd()
        .args(["embeds", tmp.path().to_str().unwrap(), "--first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<iframe").not());
}

#[test]
fn embeds_unknown_type_fails() {
    cmd()
        .args(["embeds", "whatever.html", "--types", "marquee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn embeds_missing_file_fails() {
    cmd()
        .args(["embeds", "/nonexistent/content.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Fonts Command
// =============================================================================

#[test]
fn fonts_prints_stylesheet_url() {
    cmd()
        .arg("fonts")
        .assert()
        .success()
        .stdout(predicate::str::contains("fonts.googleapis.com"))
        .stdout(predicate::str::contains("Droid+Serif"));
}

#[test]
fn fonts_flags_remove_families() {
    cmd()
        .args(["fonts", "--no-droid-serif"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Playfair+Display"))
        .stdout(predicate::str::contains("Droid+Serif").not());
}

#[test]
fn fonts_json_with_all_families_off() {
    let output = cmd()
        .args([
            "--json",
            "fonts",
            "--no-droid-serif",
            "--no-playfair-display",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(json["url"].is_null());
    assert_eq!(json["droid_serif"], false);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Input Limit
// =============================================================================

#[test]
fn input_limit_from_config_rejects_large_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hivemark.toml"), "max_input_bytes = 16\n").unwrap();
    let file = dir.path().join("content.html");
    std::fs::write(&file, "<p>well over sixteen bytes of content</p>").unwrap();

    cmd()
        .args([
            "-C",
            dir.path().to_str().unwrap(),
            "embeds",
            "content.html",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
