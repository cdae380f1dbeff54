//! Platform abstractions for Wallseason.
//!
//! - [`path`] - Shell-like path expansion and well-known user directories

pub mod path;

pub use path::{expand, expand_and_resolve, pictures_dir, resolve_input};
