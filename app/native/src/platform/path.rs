//! Path utilities for shell-like path expansion.
//!
//! Paths given on the command line (or piped in) may use `~` and may be
//! relative to the working directory. The desktop background call needs an
//! absolute path, so every input goes through [`resolve_input`].

use std::path::{Path, PathBuf};

use crate::error::WallseasonError;

/// Expands shell-like paths (tilde) to absolute paths.
///
/// - Absolute (starts with `/`): returned as-is
/// - Home-relative (starts with `~`): expanded to the user's home directory
/// - Relative: returned as-is (use [`expand_and_resolve`] for base directory resolution)
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Expands shell-like paths and resolves relative paths against a base directory.
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = expand(path);

    if expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}

/// Resolves a user-supplied path against the current working directory.
///
/// # Errors
///
/// Returns an error if the path is blank or the working directory cannot be read.
pub fn resolve_input(path: &str) -> Result<PathBuf, WallseasonError> {
    if path.trim().is_empty() {
        return Err(WallseasonError::InvalidArguments("Path must not be empty.".to_string()));
    }

    let cwd = std::env::current_dir()?;
    Ok(expand_and_resolve(path, &cwd))
}

/// Returns the user's pictures directory.
///
/// Uses the platform lookup (`My Pictures` on Windows, `~/Pictures` on macOS,
/// `XDG_PICTURES_DIR` on Linux), falling back to `<home>/Pictures` when the
/// platform has no registered pictures directory.
///
/// # Errors
///
/// Returns [`WallseasonError::PicturesDirUnavailable`] if neither the pictures
/// directory nor the home directory can be determined.
pub fn pictures_dir() -> Result<PathBuf, WallseasonError> {
    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .ok_or(WallseasonError::PicturesDirUnavailable)
}
