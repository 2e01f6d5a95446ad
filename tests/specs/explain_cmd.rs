//! Specs for `globre explain`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn prints_the_anchored_regex() {
    globre_cmd()
        .args(["explain", "*.js"])
        .assert()
        .success()
        .stdout(predicates::str::contains("^.*\\.js$"));
}

#[test]
fn globstar_emission_is_visible() {
    globre_cmd()
        .args(["explain", "--globstar", "/foo/**"])
        .assert()
        .success()
        .stdout(predicates::str::contains("((?:[^/]*(?:/|$))*)"));
}

#[test]
fn multi_match_flag_drops_the_anchors() {
    globre_cmd()
        .args(["explain", "--flags", "g", "*.js"])
        .assert()
        .success()
        .stdout(predicates::str::contains("^").not());
}

#[test]
fn json_output_reports_anchoring() {
    globre_cmd()
        .args(["explain", "--output", "json", "--flags", "g", "*.js"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("\"anchored\": false")
                .and(predicates::str::contains("\"regex\"")),
        );
}
