//! Production sink configuration.

use super::defaults::{DEFAULT_MIN_LEVEL, DEFAULT_REVEAL_PRIVATE};
use crate::log::LogLevel;

/// Configuration for [`TracingSink`](crate::log::TracingSink).
///
/// All constructors are `const` so a configured sink can be placed in a
/// `static`.
///
/// # Example
///
/// ```
/// use settingsdata_log::config::SinkConfig;
/// use settingsdata_log::log::LogLevel;
///
/// // Using defaults
/// let config = SinkConfig::default();
/// assert_eq!(config.min_level(), LogLevel::Debug);
/// assert!(!config.reveal_private());
///
/// // Custom configuration
/// let config = SinkConfig::new()
///     .with_min_level(LogLevel::Warn)
///     .with_reveal_private(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Records below this level are never loggable
    min_level: LogLevel,
    /// Show `{private}` and unflagged arguments instead of `<private>`
    reveal_private: bool,
}

impl SinkConfig {
    /// Create a sink configuration with default values.
    pub const fn new() -> Self {
        Self {
            min_level: DEFAULT_MIN_LEVEL,
            reveal_private: DEFAULT_REVEAL_PRIVATE,
        }
    }

    /// Set the lowest loggable level.
    ///
    /// Acts in addition to the subscriber's own filter: a record must pass
    /// both. Default: `Debug`.
    pub const fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set whether private arguments are revealed.
    ///
    /// Intended for development builds only. Default: `false`.
    pub const fn with_reveal_private(mut self, reveal: bool) -> Self {
        self.reveal_private = reveal;
        self
    }

    /// Get the lowest loggable level.
    pub const fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Get whether private arguments are revealed.
    pub const fn reveal_private(&self) -> bool {
        self.reveal_private
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self::new()
    }
}
