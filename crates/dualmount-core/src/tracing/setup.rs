//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize logging for the governance engine.
///
/// Reads `DUALMOUNT_LOG` for per-subsystem log levels.
/// Format: `DUALMOUNT_LOG=dualmount_analysis::roles=debug,dualmount_analysis::layout=warn`
///
/// Falls back to `dualmount=info` if `DUALMOUNT_LOG` is not set or is invalid.
/// Safe to call more than once; only the first call installs a subscriber,
/// and a subscriber installed by the host is left alone.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("dualmount=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
