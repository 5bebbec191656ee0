//! soundworks CLI - create and maintain soundworks applications
//!
//! This is the main entry point for the soundworks command-line interface.

mod cli;
mod commands;
mod output;
mod prompt;
mod version;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

/// Exit code of a run interrupted at a prompt
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if commands::is_cancelled(&err) => {
            output::warning("Aborted by user");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(err) => {
            output::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Console output covers progress, logs are for diagnostics
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
