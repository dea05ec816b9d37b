//! Diagnostic logging for the dojo
//!
//! Diagnostics go to stderr through `tracing`; stdout stays reserved for
//! the learner-facing messages in [`crate::display`].

use tracing_subscriber::EnvFilter;

use crate::cli::args::Verbosity;

/// Filter from `RUST_LOG`, or the verbosity default when unset
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
