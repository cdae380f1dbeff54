//! Shared types for CLI commands.

use std::io::{self, BufRead, IsTerminal};

use clap::ValueEnum;

use crate::error::WallseasonError;

/// Output format for commands that report structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Plain,
    /// A human-readable table.
    Table,
    /// A JSON array.
    Json,
}

/// Returns the path inputs for a command.
///
/// Positional paths win. Without them, each non-blank line of stdin is one
/// input, so commands can be chained in a pipeline.
///
/// # Errors
///
/// Returns an error if no paths were given and stdin is a terminal, or if
/// stdin cannot be read.
pub fn collect_inputs(paths: &[String]) -> Result<Vec<String>, WallseasonError> {
    if !paths.is_empty() {
        return Ok(paths.to_vec());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(WallseasonError::InvalidArguments(
            "Missing <PATH>. Pass a path or pipe one path per line on stdin.".to_string(),
        ));
    }

    read_inputs(stdin.lock())
}

/// Reads one input per non-blank line.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>, WallseasonError> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}
