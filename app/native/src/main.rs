//! Wallseason - seasonal desktop wallpaper management from the shell.
//!
//! ```text
//! wallseason get-season
//! wallseason new-wallpaper-folder
//! wallseason get-random-wallpaper ~/Pictures/$(wallseason get-season) | wallseason set-wallpaper
//! ```

fn main() {
    if let Err(err) = wallseason_lib::cli::run() {
        eprintln!("wallseason: {err}");
        std::process::exit(1);
    }
}
