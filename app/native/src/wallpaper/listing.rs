//! Wallpaper candidate listing.

use std::io;
use std::path::{Path, PathBuf};

use natord::compare;

/// Lists the regular files directly inside `dir`.
///
/// Subdirectories are skipped and nothing is filtered by extension: any regular
/// file (or symlink to one) is a candidate. Entries are naturally sorted so the
/// same directory always yields the same order.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read.
pub fn list_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    files.sort_by(|a, b| compare(a.to_string_lossy().as_ref(), b.to_string_lossy().as_ref()));
    tracing::debug!(dir = %dir.display(), count = files.len(), "listed wallpaper candidates");
    Ok(files)
}
