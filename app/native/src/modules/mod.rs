//! Feature modules for Wallseason.
//!
//! - [`season`] - Calendar season resolution
//! - [`folders`] - Seasonal folder initialization under the pictures directory
//! - [`wallpaper`] - Random wallpaper selection and desktop wallpaper setting

pub mod folders;
pub mod season;
pub mod wallpaper;

pub use folders::{FolderReport, SeasonalFolder, ensure_seasonal_folders};
pub use season::Season;
