//! Specs for `globre filter`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

fn patterns_config() -> std::path::PathBuf {
    crate::prelude::fixture("patterns").join("globre.toml")
}

#[test]
fn keeps_candidates_matching_any_pattern() {
    globre_cmd()
        .arg("filter")
        .arg("--config")
        .arg(patterns_config())
        .args(["src/lib.rs", "index.html", "notes.txt"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("src/lib.rs")
                .and(predicates::str::contains("index.html"))
                .and(predicates::str::contains("notes.txt").not()),
        );
}

#[test]
fn named_pattern_restricts_the_set() {
    globre_cmd()
        .arg("filter")
        .arg("--config")
        .arg(patterns_config())
        .args(["--pattern", "web", "src/lib.rs", "index.html"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("index.html")
                .and(predicates::str::contains("src/lib.rs").not()),
        );
}

#[test]
fn candidates_default_to_stdin() {
    globre_cmd()
        .arg("filter")
        .arg("--config")
        .arg(patterns_config())
        .write_stdin("src/a/b.rs\nREADME.md\n")
        .assert()
        .success()
        .stdout(
            predicates::str::contains("src/a/b.rs")
                .and(predicates::str::contains("README.md").not()),
        );
}

#[test]
fn unknown_pattern_name_is_an_error() {
    globre_cmd()
        .arg("filter")
        .arg("--config")
        .arg(patterns_config())
        .args(["--pattern", "nope", "src/lib.rs"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nope"));
}

#[test]
fn missing_config_file_is_an_error() {
    globre_cmd()
        .args(["filter", "--config", "/nonexistent/globre.toml", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("/nonexistent/globre.toml"));
}
