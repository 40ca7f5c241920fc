//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays clean for
//! `--output json`. The filter comes from `RUST_LOG` when set, otherwise from
//! `--verbose` or the configured `general.log_level`.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, configured_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
    };

    // try_init: a subscriber may already be installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
