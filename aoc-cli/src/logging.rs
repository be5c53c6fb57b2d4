//! Diagnostics via `tracing`, written to stderr.
//!
//! Answers go to stdout through [`crate::output`]; nothing here affects them.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn`, or `debug` when `verbose` is set.
///
/// ```bash
/// RUST_LOG=aoc_solver=debug aoc --year 2023 --day 14
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
