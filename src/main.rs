//! Diffspell: flag known typos in the lines a change adds.
//!
//! This is the main entry point for the `diffspell` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and maps the outcome or
//! error to the process exit code.

use diffspell::cli::Cli;
use diffspell::{commands, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.global.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match commands::dispatch(cli, &mut out) {
        Ok(outcome) => ExitCode::from(outcome.exit_code() as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
