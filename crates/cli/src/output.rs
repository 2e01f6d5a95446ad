// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match result rendering in text and JSON formats.

use std::io::Write;

use serde::Serialize;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;

/// Outcome of testing one candidate against a compiled pattern.
#[derive(Debug, Serialize)]
pub struct CandidateOutcome {
    pub candidate: String,
    pub matched: bool,
    /// Captured wildcard segments, present only for matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captures: Option<Vec<Option<String>>>,
}

/// A full match report: the pattern, its compiled form, and the
/// per-candidate outcomes.
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub pattern: String,
    pub regex: String,
    pub outcomes: Vec<CandidateOutcome>,
}

impl MatchReport {
    /// Whether every candidate matched (vacuously true when empty).
    pub fn all_matched(&self) -> bool {
        self.outcomes.iter().all(|o| o.matched)
    }
}

/// Print a report as pretty JSON.
pub fn print_json(report: &MatchReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print a report as one `ok`/`no` line per candidate.
pub fn print_text(report: &MatchReport, choice: ColorChoice) -> anyhow::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    for outcome in &report.outcomes {
        if outcome.matched {
            stdout.set_color(&scheme::matched())?;
            write!(stdout, "ok")?;
        } else {
            stdout.set_color(&scheme::unmatched())?;
            write!(stdout, "no")?;
        }
        stdout.reset()?;
        writeln!(stdout, " {}", outcome.candidate)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
