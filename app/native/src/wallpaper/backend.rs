//! Desktop background capability.
//!
//! Changing the desktop background is the only non-portable operation in
//! Wallseason. It sits behind [`DesktopBackground`] so the setter can be driven
//! by the native implementation, a dry run, or a test double.
//!
//! [`SystemDesktop`] delegates to the `wallpaper` crate, which picks the native
//! mechanism for the host at compile time:
//!
//! - Windows: `SystemParametersInfoW(SPI_SETDESKWALLPAPER)` with
//!   `SPIF_UPDATEINIFILE | SPIF_SENDCHANGE`, so the change is persisted to the
//!   user profile and broadcast to running applications
//! - macOS: the desktop picture of every desktop via `osascript`
//! - Linux/BSD: the running desktop environment (GNOME, KDE, XFCE, sway, ...)

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors reported by a [`DesktopBackground`] implementation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The path cannot be handed to the native API.
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
    /// The host refused or failed to apply the change.
    #[error("Desktop rejected the wallpaper change: {0}")]
    Rejected(String),
}

/// Asks the host environment to change the desktop background.
pub trait DesktopBackground {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Sets the desktop background to `path`, persisting and broadcasting the change.
    ///
    /// Callers must have checked that `path` is an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the change.
    fn set_desktop_background(&self, path: &Path) -> Result<(), BackendError>;
}

/// Native desktop background implementation for the current platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDesktop;

impl DesktopBackground for SystemDesktop {
    fn name(&self) -> &'static str { "system" }

    fn set_desktop_background(&self, path: &Path) -> Result<(), BackendError> {
        let path_str = path.to_str().ok_or_else(|| BackendError::NonUtf8Path(path.to_path_buf()))?;

        wallpaper::set_from_path(path_str).map_err(|e| BackendError::Rejected(e.to_string()))
    }
}

/// Backend that only logs the request. Used by `set-wallpaper --dry-run`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunDesktop;

impl DesktopBackground for DryRunDesktop {
    fn name(&self) -> &'static str { "dry-run" }

    fn set_desktop_background(&self, path: &Path) -> Result<(), BackendError> {
        tracing::info!(path = %path.display(), "dry run: desktop background left unchanged");
        Ok(())
    }
}

/// Selects the backend for this process.
#[must_use]
pub fn default_backend(dry_run: bool) -> Box<dyn DesktopBackground> {
    if dry_run {
        Box::new(DryRunDesktop)
    } else {
        Box::new(SystemDesktop)
    }
}
