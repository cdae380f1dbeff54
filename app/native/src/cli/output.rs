//! CLI output formatting utilities.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::modules::SeasonalFolder;

/// Writes one path per line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_paths<'a, W: Write>(
    out: &mut W,
    paths: impl IntoIterator<Item = &'a Path>,
) -> io::Result<()> {
    for path in paths {
        writeln!(out, "{}", path.display())?;
    }
    out.flush()
}

/// Renders seasonal folders as a table.
#[must_use]
pub fn folder_table(folders: &[SeasonalFolder]) -> String {
    #[derive(Tabled)]
    struct FolderRow {
        #[tabled(rename = "Season")]
        season: String,
        #[tabled(rename = "Path")]
        path: String,
        #[tabled(rename = "Created")]
        created: String,
    }

    let rows = folders.iter().map(|folder| FolderRow {
        season: folder.season.map_or_else(|| "-".to_string(), |s| s.to_string()),
        path: folder.path.display().to_string(),
        created: format_bool(folder.created),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..3)).with(Alignment::center()))
        .to_string()
}

/// Formats a boolean as a colored string.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}
