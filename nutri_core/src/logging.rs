//! Tracing setup for the `nutri` binary.
//!
//! Events go to stderr; stdout is reserved for the food log and reports.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the subscriber at INFO
pub fn init() {
    init_with_level("info")
}

/// Install the subscriber with `default_level` as the fallback filter
///
/// `RUST_LOG` wins when set, so `RUST_LOG=nutri_core=debug` shows catalog
/// lookups and score breakdowns without changing the binary.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Debug-level subscriber routed through the test harness output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
