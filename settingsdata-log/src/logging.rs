//! Logging infrastructure for the SettingsData facade.
//!
//! Installs the `tracing` subscriber that [`TracingSink`](crate::log::TracingSink)
//! emits into:
//! - Writes to `logs/settingsdata.log` (cleared on session start) unless disabled
//! - Also prints to stdout
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Logging initialization errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the log directory or clear the log file
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] io::Error),

    /// A global subscriber is already installed
    #[error("Failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging system.
///
/// When file output is enabled, creates the log directory if needed, clears
/// the previous log file and writes to it through a non-blocking writer.
/// Stdout output is always enabled.
///
/// # Returns
///
/// LoggingGuard that must be kept alive for file logging to work
///
/// # Errors
///
/// Returns error if the log file cannot be prepared or a global subscriber
/// has already been set. The log file is cleared before the subscriber is
/// installed, so a second call with file output enabled still truncates it.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let (file_layer, file_guard) = if config.file_enabled() {
        prepare_log_file(config)?;

        let file_appender = tracing_appender::rolling::never(config.log_dir(), config.log_file());
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false); // No ANSI colors in file
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(config.ansi());

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory and truncate the log file.
fn prepare_log_file(config: &LoggingConfig) -> Result<(), io::Error> {
    fs::create_dir_all(config.log_dir())?;
    fs::write(config.log_path(), "")
}

/// Filter from RUST_LOG, falling back to the configured default.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter()))
}
