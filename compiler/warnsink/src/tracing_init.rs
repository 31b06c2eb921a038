//! Opt-in subscriber setup for binaries that have none of their own.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize a `tracing` subscriber that prints to stderr.
///
/// Call this once at startup. Safe to call multiple times, and a no-op when
/// the host already installed a global subscriber.
/// Enable with `RUST_LOG=warnsink=warn` (or any broader filter).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
