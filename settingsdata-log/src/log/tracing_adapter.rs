//! Tracing library adapter implementation.

use tracing::Level;

use crate::config::SinkConfig;
use crate::log::{render, LogLevel, LogSink};

/// `tracing` target every record is emitted on.
pub const TRACING_TARGET: &str = "settingsdata";

/// Sink implementation that delegates to the `tracing` crate.
///
/// This adapter binds the facade to the `tracing` ecosystem, so whichever
/// subscriber the process installs (see [`crate::logging`]) becomes the
/// platform logging channel. Loggability follows the subscriber's filter
/// for [`TRACING_TARGET`], further narrowed by [`SinkConfig::min_level`].
///
/// `Fatal` has no `tracing` counterpart; it is emitted at `ERROR` with a
/// `fatal = true` field.
///
/// # Example
///
/// ```ignore
/// use settingsdata_log::log::{install_sink, TracingSink};
/// use std::sync::Arc;
///
/// // Assumes tracing subscriber is already initialized
/// install_sink(Arc::new(TracingSink::new())).ok();
/// settingsdata_log::log::info("Using tracing backend", &[]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    config: SinkConfig,
}

impl TracingSink {
    /// Create a tracing sink with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(SinkConfig::new())
    }

    /// Create a tracing sink with the given configuration.
    pub const fn with_config(config: SinkConfig) -> Self {
        Self { config }
    }

    /// The sink's configuration.
    pub fn config(&self) -> &SinkConfig {
        &self.config
    }
}

impl LogSink for TracingSink {
    fn is_loggable(&self, _domain: u32, _tag: &str, level: LogLevel) -> bool {
        if level < self.config.min_level() {
            return false;
        }
        // Each `enabled!` is its own callsite with a fixed level.
        match level {
            LogLevel::Debug => tracing::enabled!(target: TRACING_TARGET, Level::DEBUG),
            LogLevel::Info => tracing::enabled!(target: TRACING_TARGET, Level::INFO),
            LogLevel::Warn => tracing::enabled!(target: TRACING_TARGET, Level::WARN),
            LogLevel::Error | LogLevel::Fatal => {
                tracing::enabled!(target: TRACING_TARGET, Level::ERROR)
            }
        }
    }

    fn emit(&self, domain: u32, tag: &str, level: LogLevel, format: &str, args: &[&str]) {
        let message = render(format, args, self.config.reveal_private());
        let domain = format!("{domain:#06x}");
        match level {
            LogLevel::Debug => {
                tracing::debug!(target: TRACING_TARGET, %domain, tag, "{message}")
            }
            LogLevel::Info => tracing::info!(target: TRACING_TARGET, %domain, tag, "{message}"),
            LogLevel::Warn => tracing::warn!(target: TRACING_TARGET, %domain, tag, "{message}"),
            LogLevel::Error => {
                tracing::error!(target: TRACING_TARGET, %domain, tag, "{message}")
            }
            LogLevel::Fatal => {
                tracing::error!(target: TRACING_TARGET, %domain, tag, fatal = true, "{message}")
            }
        }
    }
}
