// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `explain` subcommand: print the regex a pattern compiles to.

use serde_json::json;

use crate::cli::{ExplainArgs, OutputFormat};
use crate::options::Options;

pub fn run(args: &ExplainArgs) -> anyhow::Result<()> {
    let options = Options {
        extended: args.extended,
        globstar: args.globstar,
        flags: args.flags.clone(),
    };
    let matcher = crate::compile(&args.pattern, &options)?;

    match args.output {
        OutputFormat::Text => println!("{}", matcher.as_str()),
        OutputFormat::Json => {
            let report = json!({
                "pattern": args.pattern,
                "regex": matcher.as_str(),
                "anchored": matcher.is_anchored(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
