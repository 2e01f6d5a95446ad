// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation options: dialect toggles and matcher flags.

use serde::Deserialize;

/// Options controlling how a glob pattern is compiled.
///
/// Both dialects default to off, matching plain globbing. The struct
/// derives [`Deserialize`] so pattern definitions can come straight out
/// of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Options {
    /// Enable extended syntax: `?` matches a single character, `[...]`
    /// character classes pass through to the engine verbatim, and
    /// `{a,b}` groups alternate.
    #[serde(default)]
    pub extended: bool,

    /// Enable `**` segment-spanning semantics. `*` then matches within
    /// a single path segment instead of across separators.
    #[serde(default)]
    pub globstar: bool,

    /// Matcher flags passed through to the engine (e.g. `i` for
    /// case-insensitive matching). The `g` flag marks multi-match use
    /// and suppresses start/end anchoring.
    #[serde(default)]
    pub flags: Option<String>,
}
