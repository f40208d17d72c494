//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "UNALIAS_LOG";

/// Install the global subscriber, writing to stderr.
///
/// `UNALIAS_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// with `verbose`. Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
