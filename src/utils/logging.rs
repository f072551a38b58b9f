//! Diagnostic logging on stderr
//!
//! Command output goes to stdout; everything here is for `--debug` runs.

use env_logger::Env;

/// Initialize the global logger. `RUST_LOG` overrides the default filter.
pub(crate) fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(debug)
        .try_init();
}
