//! Error types for Wallseason.
//!
//! This module provides the unified error type returned by every CLI command.
//! "Not found" conditions for the random picker and the wallpaper setter are not
//! errors and never reach this type; they are reported as no-result outcomes.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during command execution.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum WallseasonError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// The user's pictures directory could not be located.
    #[error("Could not determine the pictures directory. Use --pictures-dir to set one.")]
    PicturesDirUnavailable,
    /// One or more seasonal folders could not be created.
    #[error("Folder error: {0}")]
    FolderError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for WallseasonError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for WallseasonError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<String> for WallseasonError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for WallseasonError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
