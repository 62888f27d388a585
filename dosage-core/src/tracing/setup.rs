//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the dosage tracing/logging system.
///
/// Reads the `DOSAGE_LOG` environment variable for per-subsystem log levels.
/// Format: `DOSAGE_LOG=regression=debug,laws=info,dosage=warn`
///
/// Falls back to `dosage=info` if `DOSAGE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("DOSAGE_LOG").unwrap_or_else(|_| EnvFilter::new("dosage=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
