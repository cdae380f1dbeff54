//! Wallseason - seasonal desktop wallpaper management from the shell.
//!
//! Four independent commands: report the current season, create a seasonal
//! folder layout under the pictures directory, pick a random file from a
//! directory, and set the desktop background. Each command is stateless and
//! runs to completion synchronously.

pub mod cli;
pub mod error;
pub mod logging;
pub mod modules;
pub mod platform;
pub mod wallpaper;

pub use error::WallseasonError;
pub use modules::Season;
