//! Logging infrastructure for dawnwatch.
//!
//! Structured logging via `tracing`, written to stderr so the two report
//! lines on stdout stay clean. Verbosity is controlled with the `RUST_LOG`
//! environment variable and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// # Errors
///
/// Returns an error message if a global subscriber is already installed.
pub fn init_logging() -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())
}
