//! Integration tests for brandshell-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn brandshell() -> Command {
    let mut cmd = Command::cargo_bin("brandshell").unwrap();
    // Deterministic output regardless of the host environment.
    cmd.arg("--no-color")
        .env_remove("BRANDSHELL_ENV")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn write_fixture(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("brand.json");
    fs::write(&path, contents).unwrap();
    path
}

const VALID_BRAND: &str = r##"{
  "details": {
    "name": "Acme",
    "homeHref": "/",
    "tagline": "Ship the shell once.",
    "navLinks": [
      {"label": "Docs", "href": "/docs"},
      {"label": "Repo", "href": "https://github.com/acme/repo", "target": "_blank"}
    ],
    "primaryAction": {"label": "Hire Me", "href": "mailto:hello@acme.dev"},
    "secondaryAction": {"label": "Work", "href": "/work"},
    "website": "https://acme.dev",
    "gmail": "hello@acme.dev"
  },
  "theme": {
    "primaryColor": "#0ea5e9",
    "ctaLayout": "stacked"
  }
}"##;

const UNSAFE_BRAND: &str = r##"{
  "details": {
    "name": "Acme",
    "website": "javascript:alert(1)",
    "navLinks": [{"label": "Evil", "href": "//evil.example"}]
  }
}"##;

#[test]
fn help_flag_exits_zero() {
    brandshell()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("brand"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn version_flag_prints_cargo_version() {
    brandshell()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn check_accepts_a_valid_file() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, VALID_BRAND);

    brandshell()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking"))
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("2 nav link(s)"));
}

#[test]
fn check_reports_each_field_error_and_exits_two() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, UNSAFE_BRAND);

    brandshell()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "details.website must use a safe URL/path",
        ))
        .stdout(predicate::str::contains("details.navLinks[0].href"))
        .stderr(predicate::str::contains("validation error(s)"));
}

#[test]
fn check_reports_theme_errors_too() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(
        &temp,
        r##"{"details": {"name": "Acme"}, "theme": {"brandColor": "#fff"}}"##,
    );

    brandshell()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "theme.brandColor is not a supported theme key.",
        ));
}

#[test]
fn vars_prints_resolved_variables() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, VALID_BRAND);

    brandshell()
        .args(["vars", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("--brand-primary: #0ea5e9"))
        // Derived from the primary color's contrast ratio.
        .stdout(predicate::str::contains("--brand-button-text: #0f172a"));
}

#[test]
fn vars_supports_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, VALID_BRAND);

    let assert = brandshell()
        .args(["vars", path.to_str().unwrap(), "--output-format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["--brand-primary"], "#0ea5e9");
}

#[test]
fn vars_warns_when_nothing_resolves() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, r#"{"details": {"name": "Acme"}}"#);

    brandshell()
        .args(["vars", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("no CSS variables"));
}

#[test]
fn preview_renders_header_and_footer() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, VALID_BRAND);

    brandshell()
        .args(["preview", path.to_str().unwrap(), "--year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<header class=\"brand-shell-header\""))
        .stdout(predicate::str::contains("role=\"banner\""))
        .stdout(predicate::str::contains("rel=\"noopener noreferrer\""))
        .stdout(predicate::str::contains("brand-shell-header__ctas--stacked"))
        .stdout(predicate::str::contains("&copy; 2026 Acme"))
        .stdout(predicate::str::contains("</footer>"));
}

#[test]
fn preview_single_section() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, VALID_BRAND);

    brandshell()
        .args(["preview", path.to_str().unwrap(), "--section", "header"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<header"))
        .stdout(predicate::str::contains("<footer").not());
}

#[test]
fn preview_rejects_unsafe_input_without_force() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, UNSAFE_BRAND);

    brandshell()
        .args(["preview", path.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn preview_force_drops_unsafe_fields_silently() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, UNSAFE_BRAND);

    brandshell()
        .args(["preview", path.to_str().unwrap(), "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript").not())
        .stdout(predicate::str::contains("evil.example").not())
        .stdout(predicate::str::contains("<header"));
}

#[test]
fn preview_writes_to_a_file() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, VALID_BRAND);
    let out = temp.path().join("shell.html");

    brandshell()
        .args([
            "preview",
            path.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("</footer>"));
}

#[test]
fn production_env_renders_leniently() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, UNSAFE_BRAND);

    brandshell()
        .args(["preview", path.to_str().unwrap()])
        .env("BRANDSHELL_ENV", "production")
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript").not());
}
