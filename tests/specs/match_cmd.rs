//! Specs for `globre match`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn matching_candidate_exits_zero() {
    globre_cmd()
        .args(["match", "*.js", "main.js"])
        .assert()
        .success()
        .stdout(predicates::str::contains("ok main.js"));
}

#[test]
fn non_matching_candidate_exits_one() {
    globre_cmd()
        .args(["match", "*.js", "style.css"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("no style.css"));
}

#[test]
fn mixed_candidates_report_each_line() {
    globre_cmd()
        .args(["match", "*.js", "a.js", "b.css"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("ok a.js").and(predicates::str::contains("no b.css")));
}

#[test]
fn star_crosses_separators_by_default() {
    globre_cmd()
        .args(["match", "*.js", "a/b.js"])
        .assert()
        .success();
}

#[test]
fn globstar_restricts_single_star_to_one_segment() {
    globre_cmd()
        .args(["match", "--globstar", "/foo/*", "/foo/bar/baz"])
        .assert()
        .code(1);
    globre_cmd()
        .args(["match", "--globstar", "/foo/*", "/foo/bar"])
        .assert()
        .success();
}

#[test]
fn extended_group_alternates() {
    globre_cmd()
        .args(["match", "--extended", "{*.html,*.js}", "index.html", "main.js"])
        .assert()
        .success();
}

#[test]
fn multi_match_flag_allows_substring_matches() {
    globre_cmd()
        .args(["match", "--flags", "g", "*.js", "bundle a.js here"])
        .assert()
        .success();
}

#[test]
fn candidates_read_from_stdin_dash() {
    globre_cmd()
        .args(["match", "*.js", "-"])
        .write_stdin("a.js\nb.js\n")
        .assert()
        .success();
}

#[test]
fn json_output_carries_the_report() {
    globre_cmd()
        .args(["match", "--output", "json", "*.js", "a.js"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("\"pattern\": \"*.js\"")
                .and(predicates::str::contains("\"matched\": true")),
        );
}

#[test]
fn unclosed_extended_class_is_a_usage_error() {
    globre_cmd()
        .args(["match", "--extended", "[abc", "abc"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("error"));
}
