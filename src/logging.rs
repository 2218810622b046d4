//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g.
/// `SHORTEST_PATHS_LOG=shortest_paths=debug`.
pub const LOG_ENV: &str = "SHORTEST_PATHS_LOG";

/// Initialize logging to stderr so stdout only carries results.
///
/// Falls back to `info` if `SHORTEST_PATHS_LOG` is unset or
/// invalid. Calling it more than once has no effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
