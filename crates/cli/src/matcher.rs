// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matcher construction: the finalization stage.

use regex::{Regex, RegexBuilder};

use crate::error::GlobError;
use crate::flags::MatchFlags;

/// An immutable compiled glob matcher.
///
/// Cheap to clone and safe to share across threads; matching holds no
/// state. Compile once per configured pattern, then reuse.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    regex: Regex,
    anchored: bool,
}

impl CompiledMatcher {
    /// Test whether `candidate` satisfies the pattern.
    ///
    /// Anchored matchers require the full candidate to match;
    /// unanchored matchers (`g` flag) accept substring matches.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Captured sub-segments for each wildcard in the pattern, in
    /// emission order, or `None` when `candidate` does not match.
    ///
    /// Single-segment and full-segment wildcards each open one
    /// capturing group; a group inside an untaken alternation branch
    /// captures nothing.
    pub fn captures<'t>(&self, candidate: &'t str) -> Option<Vec<Option<&'t str>>> {
        self.regex
            .captures(candidate)
            .map(|caps| caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect())
    }

    /// The emitted regex text, anchors included when anchored.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the matcher requires the full candidate to match.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }
}

/// Finalize translated regex text into a compiled matcher.
///
/// Wraps the text in start/end anchors unless the multi-match flag
/// opted out, applies the engine flags, and builds the engine regex.
pub(crate) fn finalize(body: String, flags: MatchFlags) -> Result<CompiledMatcher, GlobError> {
    let anchored = !flags.unanchored;
    let source = if anchored { format!("^{body}$") } else { body };

    let mut builder = RegexBuilder::new(&source);
    flags.configure(&mut builder);
    let regex = builder.build()?;

    Ok(CompiledMatcher { regex, anchored })
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
