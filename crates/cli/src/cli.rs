//! CLI argument parsing with clap derive.

use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::color::ColorMode;

/// Compile shell-style glob patterns into regular expressions and test
/// candidates against them
#[derive(Parser)]
#[command(name = "globre")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a pattern and test candidates against it
    Match(MatchArgs),
    /// Print the regex a pattern compiles to
    Explain(ExplainArgs),
    /// Filter candidates through patterns defined in a config file
    Filter(FilterArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// The glob pattern to compile
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Candidate strings to test ("-" reads one candidate per stdin line)
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<String>,

    /// Enable extended syntax (?, [...] classes, {a,b} groups)
    #[arg(long, short = 'e')]
    pub extended: bool,

    /// Enable ** segment-spanning semantics
    #[arg(long)]
    pub globstar: bool,

    /// Matcher flags (e.g. "i" case-insensitive, "g" unanchored)
    #[arg(long, value_name = "FLAGS")]
    pub flags: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,
}

#[derive(clap::Args)]
pub struct ExplainArgs {
    /// The glob pattern to compile
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Enable extended syntax (?, [...] classes, {a,b} groups)
    #[arg(long, short = 'e')]
    pub extended: bool,

    /// Enable ** segment-spanning semantics
    #[arg(long)]
    pub globstar: bool,

    /// Matcher flags (e.g. "i" case-insensitive, "g" unanchored)
    #[arg(long, value_name = "FLAGS")]
    pub flags: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct FilterArgs {
    /// Pattern definitions file
    #[arg(short = 'C', long = "config", env = "GLOBRE_CONFIG", value_name = "FILE")]
    pub config: PathBuf,

    /// Only use the pattern with this name (default: all patterns)
    #[arg(long, value_name = "NAME")]
    pub pattern: Option<String>,

    /// Candidates to filter (default: one per stdin line)
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<String>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

/// Output format for match and explain results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Expand a candidate list, reading stdin for each `-` entry.
///
/// An empty list reads stdin entirely, so the commands compose with
/// pipes the way grep-style tools do.
pub fn gather_candidates(args: &[String]) -> anyhow::Result<Vec<String>> {
    if args.is_empty() {
        return read_stdin_lines();
    }
    let mut candidates = Vec::with_capacity(args.len());
    for arg in args {
        if arg == "-" {
            candidates.extend(read_stdin_lines()?);
        } else {
            candidates.push(arg.clone());
        }
    }
    Ok(candidates)
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        lines.push(line?);
    }
    Ok(lines)
}
