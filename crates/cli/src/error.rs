// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for glob compilation.

use thiserror::Error;

/// Errors produced when compiling a glob pattern.
#[derive(Debug, Error)]
pub enum GlobError {
    /// The dynamically-typed entry point received a non-string pattern.
    #[error("invalid pattern argument: expected a string, got {found}")]
    InvalidArgument {
        /// Type name of the rejected value.
        found: &'static str,
    },

    /// The emitted pattern was rejected by the regex engine.
    ///
    /// Only reachable through malformed input, such as an unclosed
    /// character class passed through in extended mode. The compiler
    /// performs no validation of its own; the engine's verdict is
    /// surfaced unmodified.
    #[error("pattern compiled to an unusable matcher: {0}")]
    Matcher(#[from] regex::Error),
}
