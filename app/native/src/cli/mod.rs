//! CLI module for Wallseason.
//!
//! Parses the command line, installs logging and dispatches to the command
//! implementations. Results go to stdout, diagnostics to stderr.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::WallseasonError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), WallseasonError> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    cli.execute()
}
