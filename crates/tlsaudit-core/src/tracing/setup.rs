//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the tlsaudit tracing/logging system.
///
/// Reads the `TLSAUDIT_LOG` environment variable for per-target log levels.
/// Format: `TLSAUDIT_LOG=tlsaudit_rules=debug,tlsaudit_core=warn`
///
/// Falls back to `tlsaudit=info` if `TLSAUDIT_LOG` is not set or is invalid.
///
/// Idempotent. If another global subscriber is already installed, that one
/// is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        // An embedding application may already own the global subscriber.
        if let Err(e) = installed {
            ::tracing::debug!(error = %e, "global subscriber already installed, keeping it");
        }
    });
}
