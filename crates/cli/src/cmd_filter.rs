// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `filter` subcommand: keep candidates accepted by configured
//! patterns.

use std::process::ExitCode;

use crate::cli::{FilterArgs, gather_candidates};
use crate::config::{NamedMatcher, PatternsFile};

pub fn run(args: &FilterArgs) -> anyhow::Result<ExitCode> {
    let file = PatternsFile::load(&args.config)?;
    let compiled = file.compile_all()?;

    let selected: Vec<&NamedMatcher> = match &args.pattern {
        Some(name) => {
            let found: Vec<&NamedMatcher> =
                compiled.iter().filter(|m| m.name == *name).collect();
            anyhow::ensure!(
                !found.is_empty(),
                "no pattern named {:?} in {}",
                name,
                args.config.display()
            );
            found
        }
        None => compiled.iter().collect(),
    };

    for candidate in gather_candidates(&args.candidates)? {
        if selected.iter().any(|m| m.matcher.matches(&candidate)) {
            println!("{candidate}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
