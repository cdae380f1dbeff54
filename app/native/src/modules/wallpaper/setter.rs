//! Desktop wallpaper setting.

use std::path::{Path, PathBuf};

use crate::wallpaper::DesktopBackground;

/// Result of a [`set_wallpaper`] request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The backend accepted the change.
    Applied(PathBuf),
    /// The path is not an existing file; the backend was not called.
    FileNotFound(PathBuf),
    /// The backend was called and refused the change.
    Rejected { path: PathBuf, reason: String },
}

impl SetOutcome {
    /// Returns `true` if the desktop background was changed.
    #[must_use]
    pub const fn is_success(&self) -> bool { matches!(self, Self::Applied(_)) }

    /// The path the request was made for.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Applied(path) | Self::FileNotFound(path) | Self::Rejected { path, .. } => path,
        }
    }
}

/// Sets the desktop background to `path` through `backend`.
///
/// The backend is called exactly once when `path` is an existing regular file
/// and never otherwise. Neither a missing file nor a backend rejection is an
/// error: both are reported in the returned [`SetOutcome`] and logged.
pub fn set_wallpaper(path: &Path, backend: &dyn DesktopBackground) -> SetOutcome {
    if !path.is_file() {
        tracing::info!("file does not exist at '{}'", path.display());
        return SetOutcome::FileNotFound(path.to_path_buf());
    }

    tracing::info!("setting wallpaper to '{}'", path.display());

    match backend.set_desktop_background(path) {
        Ok(()) => {
            tracing::debug!(backend = backend.name(), "desktop background updated");
            SetOutcome::Applied(path.to_path_buf())
        }
        Err(err) => {
            tracing::warn!(
                backend = backend.name(),
                path = %path.display(),
                error = %err,
                "desktop background change was not applied"
            );
            SetOutcome::Rejected { path: path.to_path_buf(), reason: err.to_string() }
        }
    }
}
