//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "OPEN_IN_EDITOR_LOG";

/// Initialize the logging subsystem
///
/// Logs go to stderr. The level is controlled by `OPEN_IN_EDITOR_LOG`,
/// `verbose` raises the default from `warn` to `debug`.
///
/// # Examples
/// ```bash
/// OPEN_IN_EDITOR_LOG=debug open-in-editor open src/main.rs:10
/// OPEN_IN_EDITOR_LOG=open_in_editor=trace open-in-editor detect
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "open_in_editor=debug,warn" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init();
}
