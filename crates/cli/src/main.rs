//! Binary entry point: argument parsing, logging setup, dispatch.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use globre::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Match(args) => globre::cmd_match::run(&args),
        Command::Explain(args) => globre::cmd_explain::run(&args).map(|()| ExitCode::SUCCESS),
        Command::Filter(args) => globre::cmd_filter::run(&args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "globre", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// `GLOBRE_LOG` overrides the level; `--verbose` bumps the default
/// from warn to debug.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "globre=debug" } else { "globre=warn" };
    let filter =
        EnvFilter::try_from_env("GLOBRE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
