// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile shell-style glob patterns into regular expressions.
//!
//! A glob is translated in a single left-to-right pass into regex text
//! and built with the [`regex`] engine. Two dialects layer on plain
//! globbing, each independently opt-in via [`Options`]:
//!
//! - **extended**: `?` matches one character, `[...]` classes pass
//!   through to the engine verbatim, `{a,b}` groups alternate.
//! - **globstar**: a `**` spanning a whole segment matches zero or more
//!   path segments; `*` stays within a single segment.
//!
//! Compiled matchers are anchored (full-string matching) unless the `g`
//! flag opts out.
//!
//! ```
//! use globre::Options;
//!
//! let opts = Options { globstar: true, ..Options::default() };
//! let matcher = globre::compile("/foo/*", &opts)?;
//! assert!(matcher.matches("/foo/bar.txt"));
//! assert!(!matcher.matches("/foo/bar/baz.txt"));
//! # Ok::<(), globre::GlobError>(())
//! ```

mod buffer;
mod classify;
mod flags;
mod star;
mod translate;

pub mod cli;
pub mod cmd_explain;
pub mod cmd_filter;
pub mod cmd_match;
pub mod color;
pub mod config;
pub mod error;
pub mod matcher;
pub mod options;
pub mod output;

pub use error::GlobError;
pub use matcher::CompiledMatcher;
pub use options::Options;

use crate::flags::MatchFlags;

/// Compile a glob pattern into a matcher.
///
/// Pure and deterministic: identical `(pattern, options)` pairs yield
/// matchers accepting the identical language. Malformed patterns are
/// not validated; they produce a best-effort matcher, or
/// [`GlobError::Matcher`] where the emitted text is unacceptable to the
/// engine.
pub fn compile(pattern: &str, options: &Options) -> Result<CompiledMatcher, GlobError> {
    let flags = MatchFlags::parse(options.flags.as_deref());
    matcher::finalize(translate::translate(pattern, options), flags)
}

/// Compile a dynamically-typed pattern value.
///
/// Configuration surfaces hand patterns through as untyped JSON.
/// Anything but a string is rejected with
/// [`GlobError::InvalidArgument`] before any translation happens.
pub fn compile_value(
    pattern: &serde_json::Value,
    options: &Options,
) -> Result<CompiledMatcher, GlobError> {
    match pattern {
        serde_json::Value::String(pattern) => compile(pattern, options),
        other => Err(GlobError::InvalidArgument { found: json_type_name(other) }),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
