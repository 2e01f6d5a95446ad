// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern definitions loaded from a TOML configuration file.
//!
//! Each configured glob compiles once at load time; the matchers live
//! for the lifetime of the configuration.
//!
//! ```toml
//! [[pattern]]
//! name = "sources"
//! glob = "src/**/*.rs"
//! globstar = true
//!
//! [[pattern]]
//! name = "web"
//! glob = "{*.html,*.js}"
//! extended = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::matcher::CompiledMatcher;
use crate::options::Options;

/// Root of a pattern definitions file.
#[derive(Debug, Deserialize)]
pub struct PatternsFile {
    /// Named pattern definitions, in file order.
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternConfig>,
}

/// One `[[pattern]]` table.
#[derive(Debug, Deserialize)]
pub struct PatternConfig {
    /// Name used to select the pattern with `--pattern`.
    pub name: String,

    /// The glob to compile.
    pub glob: String,

    /// Dialect toggles and matcher flags, inline in the table.
    #[serde(flatten)]
    pub options: Options,
}

/// A named, compiled pattern.
#[derive(Debug, Clone)]
pub struct NamedMatcher {
    pub name: String,
    pub matcher: CompiledMatcher,
}

impl PatternsFile {
    /// Load and parse a definitions file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file: PatternsFile =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        Ok(file)
    }

    /// Compile every definition, preserving file order.
    pub fn compile_all(&self) -> anyhow::Result<Vec<NamedMatcher>> {
        self.patterns
            .iter()
            .map(|p| {
                let matcher = crate::compile(&p.glob, &p.options)
                    .with_context(|| format!("compiling pattern {:?}", p.name))?;
                tracing::debug!("pattern {:?} compiled to {}", p.name, matcher.as_str());
                Ok(NamedMatcher { name: p.name.clone(), matcher })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
