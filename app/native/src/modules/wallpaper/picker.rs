//! Random wallpaper selection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::WallseasonError;
use crate::wallpaper::list_files;

/// Picks a random file from `dir` using the thread-local RNG.
///
/// See [`pick_random_with`].
///
/// # Errors
///
/// Returns an error if `dir` exists but cannot be read.
pub fn pick_random(dir: &Path) -> Result<Option<PathBuf>, WallseasonError> {
    pick_random_with(dir, &mut rand::rng())
}

/// Picks a file uniformly at random from the regular files directly inside `dir`.
///
/// Returns `Ok(None)` when `dir` does not exist, is not a directory, or holds
/// no regular files. These are no-result outcomes, not failures.
///
/// # Errors
///
/// Returns an error if `dir` cannot be inspected or read for any reason other
/// than not existing (e.g. permission denied).
pub fn pick_random_with<R: Rng>(
    dir: &Path,
    rng: &mut R,
) -> Result<Option<PathBuf>, WallseasonError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            tracing::info!("'{}' is not a directory", dir.display());
            return Ok(None);
        }
        Err(err) if is_missing(&err) => {
            tracing::info!("directory does not exist at '{}'", dir.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    }

    let mut files = match list_files(dir) {
        Ok(files) => files,
        Err(err) if is_missing(&err) => {
            tracing::info!("directory does not exist at '{}'", dir.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    if files.is_empty() {
        tracing::info!("no files found in '{}'", dir.display());
        return Ok(None);
    }

    let index = rng.random_range(0..files.len());
    let picked = files.swap_remove(index);
    tracing::debug!(path = %picked.display(), index, "picked random wallpaper");
    Ok(Some(picked))
}

/// A path component is absent or is a file where a directory was expected.
fn is_missing(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}
