//! Integration tests for the artsplit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn artsplit() -> Command {
    let mut cmd = Command::cargo_bin("artsplit").unwrap();
    cmd.env_remove("ARTSPLIT_CONFIG");
    cmd
}

#[test]
fn test_stats_by_default() {
    artsplit()
        .arg("split")
        .arg("-f")
        .arg(fixture_path("articles.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of files: 5"))
        .stdout(predicate::str::contains("Number of lines: 10"))
        .stdout(predicate::str::contains("Average number of lines: 2"))
        .stdout(predicate::str::contains(
            "Number of titles that appeared more than once: 2",
        ))
        .stdout(predicate::str::contains("Number of duplicate files: 3"));
}

#[test]
fn test_print_titles_from_stdin() {
    artsplit()
        .args(["split", "--print"])
        .write_stdin("foo foo\nbar\n=====\nbaz baz\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("foo\nbaz\n"));
}

#[test]
fn test_invalid_utf8_input_is_split() {
    artsplit()
        .args(["split", "--print"])
        .write_stdin(b"foo foo\n123\n=====\nbar bar\ncaf\xe9\n=====\nbaz baz\n789\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::diff("foo\nbar\nbaz\n"));
}

#[test]
fn test_whitespace_delimiter_warns() {
    artsplit()
        .args(["split", "--print", "-c", " "])
        .write_stdin("foo foo\n     \nbar bar\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("foo\n"))
        .stderr(predicate::str::contains("whitespace delimiter never matches"));
}

#[test]
fn test_write_files() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    artsplit()
        .arg("split")
        .arg("-f")
        .arg(fixture_path("articles.txt"))
        .arg("--write")
        .arg("--outdir")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.join("foo.txt")).unwrap(),
        "foo foo\n123\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("dupes/foo (2).txt")).unwrap(),
        "foo foo\n456\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("bar.txt")).unwrap(),
        "bar bar\n789\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("dupes/bar (3).txt")).unwrap(),
        "bar bar\n345\n"
    );
}

#[test]
fn test_write_with_extension_and_stats() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    artsplit()
        .arg("split")
        .args(["--write", "--stats", "--outext", ".md", "--format", "json"])
        .arg("--outdir")
        .arg(&out)
        .write_stdin("foo\nbar\n=====\nbaz\nbaz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"articles\": 2"))
        .stdout(predicate::str::contains("\"lines\": 4"));

    assert!(out.join("foo.md").is_file());
    assert!(out.join("baz.md").is_file());
}

#[test]
fn test_non_empty_output_directory_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("stale.txt"), "old").unwrap();

    artsplit()
        .args(["split", "--write"])
        .arg("--outdir")
        .arg(temp_dir.path())
        .write_stdin("foo\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}

#[test]
fn test_custom_delimiter() {
    artsplit()
        .args(["split", "--print", "--char", "-", "--len", "3"])
        .write_stdin("foo\n---\nbar\n--\nbaz\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("foo\nbar\n"));
}

#[test]
fn test_invalid_delimiter() {
    artsplit()
        .args(["split", "--char", "=="])
        .write_stdin("foo\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("single character"));
}

#[test]
fn test_zero_length_rejected() {
    artsplit()
        .args(["split", "--len", "0"])
        .write_stdin("foo\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 or greater"));
}

#[test]
fn test_wiki_titles() {
    artsplit()
        .args(["split", "--wiki", "--print"])
        .arg("-f")
        .arg(fixture_path("wiki.txt"))
        .assert()
        .success()
        .stdout(predicate::str::diff("foo\nbar\nbaz\n"));
}

#[test]
fn test_wiki_missing_title_aborts() {
    artsplit()
        .args(["split", "--markup", "--print"])
        .arg("-f")
        .arg(fixture_path("wiki-broken.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("foo"))
        .stderr(predicate::str::contains("no title with wiki markup"));
}

#[test]
fn test_invalid_file() {
    artsplit()
        .args(["split", "-f", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error opening file nonexistent.txt"));
}

#[test]
fn test_config_file_settings() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("artsplit.toml");
    fs::write(&config_path, "[splitting]\ndelimiter = \"#\"\nmin_length = 2\n").unwrap();

    artsplit()
        .args(["split", "--print", "--config"])
        .arg(&config_path)
        .write_stdin("foo\n##\nbar\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("foo\nbar\n"));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("artsplit.toml");

    artsplit()
        .arg("generate-config")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    artsplit()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[splitting]\ndelimiter = \"ab\"\n").unwrap();

    artsplit()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}
