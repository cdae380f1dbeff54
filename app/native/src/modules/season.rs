//! Calendar season resolution.
//!
//! Seasons are derived from the month alone (meteorological seasons for the
//! northern hemisphere). Nothing is cached: every call reads the clock again so
//! long-running callers stay correct across month boundaries.

use std::fmt;

use chrono::Datelike;
use serde::Serialize;

/// A calendar season used to bucket wallpapers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Every season in calendar order, which is also the folder creation order.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Maps a month number (1-12) to its season.
    ///
    /// March to May is spring, June to August summer, September to November
    /// fall. Anything else, including out-of-range values, is winter.
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    /// Returns the season for the current local date.
    #[must_use]
    pub fn current() -> Self {
        let month = chrono::Local::now().month();
        let season = Self::from_month(month);
        tracing::info!(month, season = %season, "current season: {season}");
        season
    }

    /// The season name, also used as its folder name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
