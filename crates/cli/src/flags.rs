// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matcher flag parsing.
//!
//! Flags arrive as a compact string. `g` marks multi-match use and
//! suppresses anchoring; the rest toggle engine behavior. Characters
//! with no engine equivalent are ignored with a warning.

use regex::RegexBuilder;

/// Parsed matcher flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MatchFlags {
    /// `g`: the compiled matcher is left unanchored for substring use.
    pub unanchored: bool,
    /// `i`: case-insensitive matching.
    pub case_insensitive: bool,
    /// `m`: `^` and `$` also match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` also matches newline.
    pub dot_matches_new_line: bool,
    /// `x`: insignificant whitespace in the pattern.
    pub ignore_whitespace: bool,
}

impl MatchFlags {
    /// Parse a flag string.
    pub fn parse(flags: Option<&str>) -> Self {
        let mut parsed = Self::default();
        for c in flags.unwrap_or_default().chars() {
            match c {
                'g' => parsed.unanchored = true,
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_matches_new_line = true,
                'x' => parsed.ignore_whitespace = true,
                // The engine is Unicode-aware by default.
                'u' => {}
                other => tracing::warn!("ignoring unsupported matcher flag {other:?}"),
            }
        }
        parsed
    }

    /// Apply the engine toggles to a regex builder.
    pub fn configure(&self, builder: &mut RegexBuilder) {
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace);
    }
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
