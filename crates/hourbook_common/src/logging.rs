// --- File: crates/hourbook_common/src/logging.rs ---
//! Logging setup for the hourbook binaries.
//!
//! Call [`init`] once at startup. The filter honors `RUST_LOG` and falls
//! back to `hourbook=info` when the variable is unset.

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Uses `try_init` so repeated calls (e.g. from tests) are harmless.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hourbook=info"));

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("logging initialized");
    }
}
