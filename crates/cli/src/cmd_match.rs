// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `match` subcommand: compile a pattern, test candidates.
//!
//! Exit code 0 when every candidate matches, 1 otherwise.

use std::process::ExitCode;

use crate::cli::{MatchArgs, OutputFormat, gather_candidates};
use crate::options::Options;
use crate::output::{self, CandidateOutcome, MatchReport};

pub fn run(args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let options = Options {
        extended: args.extended,
        globstar: args.globstar,
        flags: args.flags.clone(),
    };
    let matcher = crate::compile(&args.pattern, &options)?;
    tracing::debug!("compiled {:?} to {}", args.pattern, matcher.as_str());

    let outcomes = gather_candidates(&args.candidates)?
        .into_iter()
        .map(|candidate| {
            let matched = matcher.matches(&candidate);
            let captures = matcher.captures(&candidate).map(|caps| {
                caps.into_iter().map(|c| c.map(str::to_string)).collect()
            });
            CandidateOutcome { candidate, matched, captures }
        })
        .collect();

    let report = MatchReport {
        pattern: args.pattern.clone(),
        regex: matcher.as_str().to_string(),
        outcomes,
    };

    match args.output {
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Text => output::print_text(&report, args.color.to_choice())?,
    }

    Ok(if report.all_matched() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
