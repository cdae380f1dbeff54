//! CLI command definitions using Clap.
//!
//! Each command lives in its own submodule:
//!
//! - `season` - `get-season`
//! - `folders` - `new-wallpaper-folder`
//! - `wallpaper` - `get-random-wallpaper` and `set-wallpaper`
//! - `types` - Shared types and pipeline input handling

use std::io;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::WallseasonError;

pub mod folders;
pub mod season;
pub mod types;
pub mod wallpaper;

pub use folders::NewWallpaperFolderArgs;
pub use season::GetSeasonArgs;
pub use wallpaper::{GetRandomWallpaperArgs, SetWallpaperArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wallseason - seasonal desktop wallpapers from the shell.
#[derive(Parser, Debug)]
#[command(name = "wallseason")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print diagnostic messages to stderr (-v info, -vv debug, -vvv trace).
    ///
    /// The WALLSEASON_LOG environment variable takes precedence when set.
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Print the current season (Spring, Summer, Fall or Winter).
    GetSeason(GetSeasonArgs),

    /// Create the pictures directory and one folder per season inside it.
    ///
    /// Existing folders are left untouched. Prints every folder that exists
    /// afterwards, and fails if any of them could not be created.
    NewWallpaperFolder(NewWallpaperFolderArgs),

    /// Print a random file from a directory.
    ///
    /// Prints nothing if the directory does not exist or contains no files.
    #[command(after_long_help = r#"Examples:
  wallseason get-random-wallpaper ~/Pictures/Winter
  wallseason get-random-wallpaper ~/Pictures/$(wallseason get-season)
  echo ~/Pictures/Fall | wallseason get-random-wallpaper --seed 7"#)]
    GetRandomWallpaper(GetRandomWallpaperArgs),

    /// Set the desktop background to an image file.
    ///
    /// Does nothing if the file does not exist.
    #[command(after_long_help = r#"Examples:
  wallseason set-wallpaper ~/Pictures/Winter/snow.jpg
  wallseason get-random-wallpaper ~/Pictures/Fall | wallseason set-wallpaper"#)]
    SetWallpaper(SetWallpaperArgs),

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(wallseason completions --shell zsh)"
    ///   wallseason completions --shell fish > ~/.config/fish/completions/wallseason.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), WallseasonError> {
        match &self.command {
            Commands::GetSeason(args) => season::execute(args),
            Commands::NewWallpaperFolder(args) => folders::execute(args),
            Commands::GetRandomWallpaper(args) => wallpaper::execute_get_random(args),
            Commands::SetWallpaper(args) => wallpaper::execute_set(args),
            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "wallseason", &mut io::stdout());
    }
}
