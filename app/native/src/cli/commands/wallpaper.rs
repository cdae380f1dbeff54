//! `get-random-wallpaper` and `set-wallpaper` commands.
//!
//! Both accept paths as arguments or one per line on stdin, and process each
//! input independently. Missing directories, empty directories and missing
//! files produce no output and are not errors.

use std::io::Write;

use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::types::collect_inputs;
use crate::error::WallseasonError;
use crate::modules::wallpaper::{pick_random_with, set_wallpaper};
use crate::platform::resolve_input;
use crate::wallpaper::default_backend;

/// Arguments for `get-random-wallpaper`.
#[derive(Args, Debug)]
pub struct GetRandomWallpaperArgs {
    /// Directories that contain image files. Read from stdin when omitted.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Seed the random source for a reproducible pick.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

/// Arguments for `set-wallpaper`.
#[derive(Args, Debug)]
pub struct SetWallpaperArgs {
    /// Image files to set as the desktop background. Read from stdin when omitted.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Log what would be set without changing the desktop.
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the get-random-wallpaper command.
///
/// One random source is shared by every input of the invocation.
pub fn execute_get_random(args: &GetRandomWallpaperArgs) -> Result<(), WallseasonError> {
    let inputs = collect_inputs(&args.paths)?;
    let mut rng = args.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut stdout = std::io::stdout().lock();

    for input in &inputs {
        let dir = resolve_input(input)?;
        if let Some(picked) = pick_random_with(&dir, &mut rng)? {
            writeln!(stdout, "{}", picked.display())?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Execute the set-wallpaper command.
///
/// With several inputs the desktop is set once per existing file, in order, so
/// the last one wins.
pub fn execute_set(args: &SetWallpaperArgs) -> Result<(), WallseasonError> {
    let inputs = collect_inputs(&args.paths)?;
    let backend = default_backend(args.dry_run);

    for input in &inputs {
        let path = resolve_input(input)?;
        let outcome = set_wallpaper(&path, backend.as_ref());
        tracing::debug!(?outcome, "set-wallpaper finished");
    }

    Ok(())
}
