//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the Causeway tracing/logging system.
///
/// Reads the `CAUSEWAY_LOG` environment variable, e.g.
/// `CAUSEWAY_LOG=causeway_search=debug`.
/// Falls back to `causeway=info` if it is not set or is invalid.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(defaults::DEFAULT_LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Initialize tracing with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(EnvFilter::new(filter))
            .try_init();
    });
}
