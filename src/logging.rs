//! File-based logging.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily
//! rotated file instead of stderr.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

const LOG_FILE_PREFIX: &str = "mixtape";

/// Install the global subscriber writing to `<log_dir>/mixtape.YYYY-MM-DD`.
///
/// `RUST_LOG` wins over `settings.filter` when set.
pub fn init_logging(log_dir: &Path, settings: &LoggingSettings) -> std::io::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    // The guard flushes on drop; it has to outlive the whole process.
    Box::leak(Box::new(guard));

    let filter = build_filter(&settings.filter);

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Ok(())
}

fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(LoggingSettings::default().filter))
}
