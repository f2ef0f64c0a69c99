//! Configuration types for the sink and the logging subscriber.
//!
//! Each config struct handles one concern and is built with `with_*`
//! methods over sensible defaults.
//!
//! # Example
//!
//! ```
//! use settingsdata_log::config::{LoggingConfig, SinkConfig};
//! use settingsdata_log::log::LogLevel;
//!
//! let sink_config = SinkConfig::new().with_min_level(LogLevel::Info);
//! let logging_config = LoggingConfig::new().without_file();
//! ```

mod defaults;
mod logging;
mod sink;

pub use defaults::{
    DEFAULT_FILTER, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE, DEFAULT_MIN_LEVEL, DEFAULT_REVEAL_PRIVATE,
};
pub use logging::LoggingConfig;
pub use sink::SinkConfig;
