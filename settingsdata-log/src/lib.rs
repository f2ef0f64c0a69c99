//! SettingsData logging facade.
//!
//! Forwards severity-tagged log calls to a platform logging sink under a
//! fixed domain code and tag, skipping every call the sink reports as not
//! loggable.
//!
//! ```
//! use settingsdata_log::log::{self, Log, RecordingSink};
//! use std::sync::Arc;
//!
//! // Process-wide entry points
//! log::info("value=%{public}d", &["5"]);
//! settingsdata_log::log_error!("fail");
//!
//! // Injected sink
//! let sink = Arc::new(RecordingSink::new());
//! Log::new(sink.clone()).warn("low battery %{public}s", &["12%"]);
//! assert_eq!(sink.emit_count(), 1);
//! ```

pub mod config;
pub mod log;
pub mod logging;

/// Version of the settingsdata-log library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
