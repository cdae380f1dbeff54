//! `new-wallpaper-folder` command.

use std::io::Write;

use clap::Args;
use colored::Colorize;

use super::types::OutputFormat;
use crate::cli::output;
use crate::error::WallseasonError;
use crate::modules::ensure_seasonal_folders;
use crate::platform::{pictures_dir, resolve_input};

/// Arguments for `new-wallpaper-folder`.
#[derive(Args, Debug)]
pub struct NewWallpaperFolderArgs {
    /// Root directory to create the seasonal folders in.
    /// Defaults to the user's pictures directory.
    #[arg(long, value_name = "PATH", env = "WALLSEASON_PICTURES_DIR")]
    pub pictures_dir: Option<String>,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

/// Execute the new-wallpaper-folder command.
///
/// Prints every directory that exists afterwards, then fails if any could not
/// be created.
pub fn execute(args: &NewWallpaperFolderArgs) -> Result<(), WallseasonError> {
    let root = match args.pictures_dir.as_deref() {
        Some(path) => resolve_input(path)?,
        None => pictures_dir()?,
    };

    let report = ensure_seasonal_folders(&root);
    let mut stdout = std::io::stdout().lock();

    match args.format {
        OutputFormat::Plain => output::write_paths(&mut stdout, report.paths())?,
        OutputFormat::Table => {
            let count = report.folders.len();
            writeln!(stdout, "{}", format!("Wallpaper folders ({count})").bold())?;
            writeln!(stdout, "{}", output::folder_table(&report.folders))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.folders)?;
            writeln!(stdout, "{json}")?;
        }
    }

    report.failure_error().map_or(Ok(()), Err)
}
