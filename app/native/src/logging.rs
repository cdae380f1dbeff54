//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so stdout only ever carries command results and
//! can be piped from one command into the next.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive that overrides `-v`.
pub const LOG_ENV: &str = "WALLSEASON_LOG";

/// Maps the `-v` count to a default filter level.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
