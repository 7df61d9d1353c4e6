//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

/// Initialize the driftwatch tracing/logging system.
///
/// Reads `DRIFTWATCH_LOG` for per-crate log levels, e.g.
/// `DRIFTWATCH_LOG=driftwatch_analysis=debug`.
///
/// Falls back to info level for both driftwatch crates if the variable is
/// unset or invalid. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();

        ::tracing::debug!(version = VERSION, "tracing initialized");
    });
}
