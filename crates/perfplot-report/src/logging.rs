// File: crates/perfplot-report/src/logging.rs
// Summary: tracing subscriber setup for the report binaries.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Progress lines stay on stdout, so logs never interleave with them.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
