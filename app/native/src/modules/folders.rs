//! Seasonal wallpaper folder initialization.
//!
//! Creates the pictures directory and one subdirectory per [`Season`] below it.
//! Existing directories are left untouched. Every path is attempted even when
//! an earlier one fails; nothing is rolled back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::season::Season;
use crate::error::WallseasonError;

/// A directory that exists after initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalFolder {
    /// The season this folder holds, or `None` for the pictures root.
    pub season: Option<Season>,
    /// Path of the directory.
    pub path: PathBuf,
    /// Whether this run created the directory.
    pub created: bool,
}

/// A directory that could not be created.
#[derive(Debug)]
pub struct FolderFailure {
    pub season: Option<Season>,
    pub path: PathBuf,
    pub error: io::Error,
}

/// Outcome of [`ensure_seasonal_folders`].
#[derive(Debug, Default)]
pub struct FolderReport {
    /// Directories that exist, in creation order (root first).
    pub folders: Vec<SeasonalFolder>,
    /// Directories that could not be created.
    pub failures: Vec<FolderFailure>,
}

impl FolderReport {
    /// Returns `true` if every directory exists.
    #[must_use]
    pub fn is_complete(&self) -> bool { self.failures.is_empty() }

    /// Paths of the directories that exist.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.folders.iter().map(|folder| folder.path.as_path())
    }

    /// Builds the command error for the failed directories, if any.
    #[must_use]
    pub fn failure_error(&self) -> Option<WallseasonError> {
        if self.failures.is_empty() {
            return None;
        }

        let details = self
            .failures
            .iter()
            .map(|failure| format!("{}: {}", failure.path.display(), failure.error))
            .collect::<Vec<_>>()
            .join("; ");

        Some(WallseasonError::FolderError(format!(
            "failed to create {} of {} folder(s): {details}",
            self.failures.len(),
            self.folders.len() + self.failures.len()
        )))
    }

    fn record(&mut self, season: Option<Season>, path: PathBuf) {
        tracing::info!("attempting to create directory at '{}'", path.display());

        match ensure_dir(&path) {
            Ok(created) => {
                tracing::debug!(path = %path.display(), created, "directory ready");
                self.folders.push(SeasonalFolder { season, path, created });
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), error = %error, "failed to create directory");
                self.failures.push(FolderFailure { season, path, error });
            }
        }
    }
}

/// Ensures `root` and `root/<Season>` exist for every season.
///
/// Returns a report listing up to five directories (root first, then
/// [`Season::ALL`] order). Running it again on the same root reports the same
/// paths with `created == false`.
#[must_use]
pub fn ensure_seasonal_folders(root: &Path) -> FolderReport {
    let mut report = FolderReport::default();

    report.record(None, root.to_path_buf());
    for season in Season::ALL {
        report.record(Some(season), season_folder(root, season));
    }

    report
}

/// Returns the folder path for `season` under `root`.
#[must_use]
pub fn season_folder(root: &Path, season: Season) -> PathBuf { root.join(season.as_str()) }

/// Creates `path` (and missing parents) unless it is already a directory.
///
/// Returns whether the directory was created.
fn ensure_dir(path: &Path) -> io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path)?;
    Ok(true)
}
