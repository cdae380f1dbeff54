//! Low-level wallpaper plumbing.
//!
//! - [`backend`] - The desktop background capability and its platform implementations
//! - [`listing`] - Directory listing for wallpaper candidates

pub mod backend;
pub mod listing;

pub use backend::{BackendError, DesktopBackground, DryRunDesktop, SystemDesktop, default_backend};
pub use listing::list_files;
