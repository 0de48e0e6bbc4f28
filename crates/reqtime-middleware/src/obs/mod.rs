//! Logging setup.
//!
//! `RUST_LOG` drives the filter (e.g. `RUST_LOG=reqtime_middleware=debug`).

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global fmt subscriber. Call once from the binary.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}
