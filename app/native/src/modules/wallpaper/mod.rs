//! Wallpaper selection and setting.
//!
//! A shell typically chains the two: pick a random file from a seasonal folder,
//! then hand it to the setter.

pub mod picker;
pub mod setter;

pub use picker::{pick_random, pick_random_with};
pub use setter::{SetOutcome, set_wallpaper};
