//! Logger initialisation.

use env_logger::Env;

/// Installs the global logger.
///
/// `RUST_LOG` wins when set; otherwise the filter is `warn`, or `debug` with
/// `verbose`. Repeated calls are ignored.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
