//! SettingsData logging facade and its sinks.
//!
//! This module decouples application code from the platform logging
//! subsystem. Application code logs through the facade; the facade checks
//! loggability for the fixed [`DOMAIN`] and [`TAG`] and forwards to a
//! [`LogSink`].
//!
//! # Architecture
//!
//! - `LogSink` trait: The platform interface the facade depends on
//! - `Log` / free functions / `log_*!` macros: The facade itself
//! - `TracingSink`: Production adapter that delegates to the `tracing` crate
//! - `RecordingSink`: Records queries and records for tests
//! - `NoOpSink`: Nothing is loggable
//!
//! # Usage
//!
//! Components that take their logger by injection hold a [`Log`]:
//!
//! ```
//! use settingsdata_log::log::{Log, NoOpSink};
//! use std::sync::Arc;
//!
//! struct SettingsStore {
//!     log: Log,
//! }
//!
//! impl SettingsStore {
//!     fn new(log: Log) -> Self {
//!         Self { log }
//!     }
//!
//!     fn put(&self, key: &str) {
//!         self.log.info("put %{public}s", &[key]);
//!     }
//! }
//!
//! SettingsStore::new(Log::new(Arc::new(NoOpSink))).put("brightness");
//! ```
//!
//! Everything else uses the process-wide functions:
//!
//! ```
//! use settingsdata_log::{log, log_warn};
//!
//! log::debug("starting", &[]);
//! log_warn!("retrying %{public}s", "sync");
//! ```

mod facade;
mod format;
mod level;
mod noop;
mod recording;
mod sink;
mod tracing_adapter;

pub use facade::{
    debug, error, fatal, global, info, install_sink, warn, InstallError, Log, DOMAIN, TAG,
};
pub use format::{render, Privacy, PRIVATE_MASK};
pub use level::{LevelParseError, LogLevel};
pub use noop::NoOpSink;
pub use recording::{LogRecord, LoggabilityQuery, RecordingSink};
pub use sink::LogSink;
pub use tracing_adapter::{TracingSink, TRACING_TARGET};
