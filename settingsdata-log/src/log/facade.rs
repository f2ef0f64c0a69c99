//! The SettingsData logging facade.
//!
//! Every call asks the sink whether `(DOMAIN, TAG, level)` is loggable and
//! only then forwards the format string and arguments. Nothing is
//! formatted, buffered or validated here; the sink owns all of that.

use std::fmt;
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::log::{LogLevel, LogSink, TracingSink};

/// Domain code identifying this subsystem to the platform logger.
pub const DOMAIN: u32 = 0x0500;

/// Tag identifying this log source.
pub const TAG: &str = "SettingsData";

static GLOBAL_SINK: OnceLock<Arc<dyn LogSink>> = OnceLock::new();

/// Used by the free functions until [`install_sink`] is called.
static DEFAULT_SINK: TracingSink = TracingSink::new();

/// Error installing the process-wide sink.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallError {
    /// A sink was already installed; the existing one stays in place.
    #[error("A global log sink is already installed")]
    AlreadyInstalled,
}

/// Install the sink used by the free functions and `log_*!` macros.
///
/// Succeeds once per process. Until it is called, records go to a
/// [`TracingSink`] with the default configuration.
pub fn install_sink(sink: Arc<dyn LogSink>) -> Result<(), InstallError> {
    GLOBAL_SINK
        .set(sink)
        .map_err(|_| InstallError::AlreadyInstalled)
}

fn global_sink() -> &'static dyn LogSink {
    match GLOBAL_SINK.get() {
        Some(sink) => &**sink,
        None => &DEFAULT_SINK,
    }
}

/// A [`Log`] handle bound to the process-wide sink.
pub fn global() -> Log {
    match GLOBAL_SINK.get() {
        Some(sink) => Log::new(Arc::clone(sink)),
        None => Log::new(Arc::new(DEFAULT_SINK)),
    }
}

/// Facade over an injected sink.
///
/// Cloning is cheap; clones share the sink.
///
/// # Example
///
/// ```
/// use settingsdata_log::log::{Log, LogLevel, RecordingSink, DOMAIN, TAG};
/// use std::sync::Arc;
///
/// let sink = Arc::new(RecordingSink::new());
/// let log = Log::new(sink.clone());
/// log.info("value=%{public}d", &["5"]);
///
/// let record = &sink.records()[0];
/// assert_eq!((record.domain, record.tag.as_str()), (DOMAIN, TAG));
/// assert_eq!(record.level, LogLevel::Info);
/// assert_eq!(record.args, vec!["5".to_string()]);
/// ```
#[derive(Clone)]
pub struct Log {
    sink: Arc<dyn LogSink>,
}

impl Log {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// The sink this handle forwards to.
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Log a debug-level message.
    pub fn debug(&self, format: &str, args: &[&str]) {
        forward(&*self.sink, LogLevel::Debug, format, args);
    }

    /// Log an info-level message.
    pub fn info(&self, format: &str, args: &[&str]) {
        forward(&*self.sink, LogLevel::Info, format, args);
    }

    /// Log a warning-level message.
    pub fn warn(&self, format: &str, args: &[&str]) {
        forward(&*self.sink, LogLevel::Warn, format, args);
    }

    /// Log an error-level message.
    pub fn error(&self, format: &str, args: &[&str]) {
        forward(&*self.sink, LogLevel::Error, format, args);
    }

    /// Log a fatal-level message.
    pub fn fatal(&self, format: &str, args: &[&str]) {
        forward(&*self.sink, LogLevel::Fatal, format, args);
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log")
            .field("domain", &format_args!("{DOMAIN:#06x}"))
            .field("tag", &TAG)
            .finish_non_exhaustive()
    }
}

fn forward(sink: &dyn LogSink, level: LogLevel, format: &str, args: &[&str]) {
    if !sink.is_loggable(DOMAIN, TAG, level) {
        return;
    }
    match level {
        LogLevel::Debug => sink.debug(DOMAIN, TAG, format, args),
        LogLevel::Info => sink.info(DOMAIN, TAG, format, args),
        LogLevel::Warn => sink.warn(DOMAIN, TAG, format, args),
        LogLevel::Error => sink.error(DOMAIN, TAG, format, args),
        LogLevel::Fatal => sink.fatal(DOMAIN, TAG, format, args),
    }
}

/// Log a debug-level message through the process-wide sink.
pub fn debug(format: &str, args: &[&str]) {
    forward(global_sink(), LogLevel::Debug, format, args);
}

/// Log an info-level message through the process-wide sink.
pub fn info(format: &str, args: &[&str]) {
    forward(global_sink(), LogLevel::Info, format, args);
}

/// Log a warning-level message through the process-wide sink.
pub fn warn(format: &str, args: &[&str]) {
    forward(global_sink(), LogLevel::Warn, format, args);
}

/// Log an error-level message through the process-wide sink.
pub fn error(format: &str, args: &[&str]) {
    forward(global_sink(), LogLevel::Error, format, args);
}

/// Log a fatal-level message through the process-wide sink.
pub fn fatal(format: &str, args: &[&str]) {
    forward(global_sink(), LogLevel::Fatal, format, args);
}

/// Convenience macros taking a variable number of string arguments.
///
/// Each argument may be anything implementing `AsRef<str>`.
///
/// ```
/// use settingsdata_log::{log_error, log_info};
///
/// let count = 3.to_string();
/// log_info!("loaded %{public}s entries", count);
/// log_error!("fail");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::debug($format, &[$(::core::convert::AsRef::<str>::as_ref(&$arg)),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::info($format, &[$(::core::convert::AsRef::<str>::as_ref(&$arg)),*])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::warn($format, &[$(::core::convert::AsRef::<str>::as_ref(&$arg)),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::error($format, &[$(::core::convert::AsRef::<str>::as_ref(&$arg)),*])
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::fatal($format, &[$(::core::convert::AsRef::<str>::as_ref(&$arg)),*])
    };
}
