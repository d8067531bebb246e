//! Tracing setup for the binary. Logs go to stderr so stdout stays a clean
//! DOT document.

use crate::cli::output::OutputConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "BPTREE_DOT_LOG";

/// Filter used when `BPTREE_DOT_LOG` is unset.
pub fn default_filter(out: &OutputConfig) -> &'static str {
    if out.verbose {
        "debug"
    } else if out.quiet {
        "error"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(out: &OutputConfig) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter(out)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(out.color)
        .with_target(false)
        .without_time()
        .try_init();
}
