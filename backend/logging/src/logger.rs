//! Structured logger setup.
//!
//! Console output for humans, daily-rotated NDJSON files for machines.
//! `RUST_LOG` wins over the configured level when set.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Base name of the rolling log file (`<log_dir>/relayforge.log.YYYY-MM-DD`).
const LOG_FILE_PREFIX: &str = "relayforge.log";

/// Initialize the global structured logger.
///
/// Idempotent: a second call is a no-op, so tests and the binary can
/// both call it freely.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            log_dir,
            LOG_FILE_PREFIX,
        ));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout);

    // try_init so a previously installed subscriber (e.g. in tests) wins.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
