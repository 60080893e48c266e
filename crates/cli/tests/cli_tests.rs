//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("frontpage")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn json_numbers(stdout: &[u8]) -> Vec<u64> {
    let value: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|story| story["number"].as_u64().unwrap())
        .collect()
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("front_page.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Show HN: A tiny Rust scraper for the front page"))
        .stdout(predicate::str::contains("118 points | 54 comments"));
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("front_page.html")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes on structured logging"));
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", &get_fixture_path("front_page.html")])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_numbers(&output.stdout), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_cli_points_mode() {
    let output = cmd()
        .args(["-f", "json", "-m", "points-desc-short-titles", &get_fixture_path("front_page.html")])
        .output()
        .unwrap();

    assert_eq!(json_numbers(&output.stdout), vec![7, 2, 5]);
}

#[test]
fn test_cli_comments_mode() {
    let output = cmd()
        .args(["-f", "json", "--mode", "comments-desc-long-titles", &get_fixture_path("front_page.html")])
        .output()
        .unwrap();

    assert_eq!(json_numbers(&output.stdout), vec![1, 6, 3, 4]);
}

#[test]
fn test_cli_unknown_mode_shows_all() {
    let output = cmd()
        .args(["-f", "json", "-m", "garbage", &get_fixture_path("front_page.html")])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_numbers(&output.stdout).len(), 7);
}

#[test]
fn test_cli_json_header() {
    cmd()
        .args(["-f", "json", "--header", "-m", "points-desc-short-titles"])
        .arg(get_fixture_path("front_page.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"points-desc-short-titles""#))
        .stdout(predicate::str::contains(r#""count":3"#));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("stories.json");

    cmd()
        .args(["-f", "json", "-o", output.to_str().unwrap()])
        .arg(get_fixture_path("front_page.html"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read(&output).unwrap();
    assert_eq!(json_numbers(&written).len(), 7);
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .arg("nonexistent.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file: nonexistent.html"))
        .stderr(predicate::str::contains("File not found: nonexistent.html"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "markdown", &get_fixture_path("front_page.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("front_page.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Frontpage"))
        .stderr(predicate::str::contains("Timing Summary"));
}

#[test]
fn test_cli_verbose_unknown_mode_warns() {
    cmd()
        .args(["-v", "-m", "nope", &get_fixture_path("front_page.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown mode"));
}
