//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "adboard.log";

/// Initializes the tracing subscriber with a rotating log file.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events based on the resolved trace level
/// 2. Formats them as plain text without ANSI colors
/// 3. Writes to `<data_dir>/adboard.log`, rotating at 10 MB with 3 backups
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if directory creation fails (logging is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```rust
/// use adboard::observability::init_tracing;
/// use adboard::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     data_dir: Some(dir.path().to_path_buf()),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(data_dir.join(LOG_FILE_NAME));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
