//! Default values for sink and logging settings.

use crate::log::LogLevel;

/// Lowest level the production sink reports as loggable.
pub const DEFAULT_MIN_LEVEL: LogLevel = LogLevel::Debug;

/// Whether private and unflagged arguments are shown instead of masked.
pub const DEFAULT_REVEAL_PRIVATE: bool = false;

/// Directory for log files, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Log file name inside [`DEFAULT_LOG_DIR`].
pub const DEFAULT_LOG_FILE: &str = "settingsdata.log";

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";
