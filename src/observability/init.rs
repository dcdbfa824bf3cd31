//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, setting up the pipeline from
//! `tracing` macros to the rotating log file.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "rickdex.log";

/// Initializes the tracing subscriber with a rotating file sink.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters events based on the resolved trace level
/// 2. Formats each event as a plain text line (no ANSI colors)
/// 3. Writes to a rotating file with backups
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `<data_dir>/rickdex.log`. Standard output is reserved
/// for the rendered frame, so nothing is ever logged there.
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Silently fails if directory creation fails (logging is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(config.data_dir.join(LOG_FILE_NAME));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
