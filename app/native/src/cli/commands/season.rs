//! `get-season` command.

use std::io::Write;

use clap::Args;

use crate::error::WallseasonError;
use crate::modules::Season;

/// Arguments for `get-season`.
#[derive(Args, Debug)]
pub struct GetSeasonArgs {
    /// Report the season for this month (1-12) instead of today.
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

/// Execute the get-season command.
pub fn execute(args: &GetSeasonArgs) -> Result<(), WallseasonError> {
    let season = args.month.map_or_else(Season::current, Season::from_month);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{season}")?;
    Ok(())
}
