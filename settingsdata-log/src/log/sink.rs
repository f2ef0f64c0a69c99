//! Platform logging sink trait definition.

use std::sync::Arc;

use crate::log::LogLevel;

/// The platform logging subsystem, as seen by the facade.
///
/// A sink answers whether a `(domain, tag, level)` combination is currently
/// loggable and emits formatted records. Formatting of `format` against
/// `args` is the sink's concern; the facade forwards both untouched.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single sink can serve every
/// thread in the process.
///
/// # Example
///
/// ```
/// use settingsdata_log::log::{LogLevel, LogSink, RecordingSink};
///
/// let sink = RecordingSink::new();
/// if sink.is_loggable(0x0500, "SettingsData", LogLevel::Info) {
///     sink.info(0x0500, "SettingsData", "value=%{public}d", &["5"]);
/// }
/// assert_eq!(sink.emit_count(), 1);
/// ```
pub trait LogSink: Send + Sync {
    /// Whether records for this domain, tag and level would be output.
    fn is_loggable(&self, domain: u32, tag: &str, level: LogLevel) -> bool;

    /// Emit a record at the specified level.
    ///
    /// This is the core method that implementations must provide.
    /// The per-severity methods delegate to it.
    fn emit(&self, domain: u32, tag: &str, level: LogLevel, format: &str, args: &[&str]);

    /// Emit a debug-level record.
    fn debug(&self, domain: u32, tag: &str, format: &str, args: &[&str]) {
        self.emit(domain, tag, LogLevel::Debug, format, args);
    }

    /// Emit an info-level record.
    fn info(&self, domain: u32, tag: &str, format: &str, args: &[&str]) {
        self.emit(domain, tag, LogLevel::Info, format, args);
    }

    /// Emit a warning-level record.
    fn warn(&self, domain: u32, tag: &str, format: &str, args: &[&str]) {
        self.emit(domain, tag, LogLevel::Warn, format, args);
    }

    /// Emit an error-level record.
    fn error(&self, domain: u32, tag: &str, format: &str, args: &[&str]) {
        self.emit(domain, tag, LogLevel::Error, format, args);
    }

    /// Emit a fatal-level record.
    fn fatal(&self, domain: u32, tag: &str, format: &str, args: &[&str]) {
        self.emit(domain, tag, LogLevel::Fatal, format, args);
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn is_loggable(&self, domain: u32, tag: &str, level: LogLevel) -> bool {
        (**self).is_loggable(domain, tag, level)
    }

    fn emit(&self, domain: u32, tag: &str, level: LogLevel, format: &str, args: &[&str]) {
        (**self).emit(domain, tag, level, format, args)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn is_loggable(&self, domain: u32, tag: &str, level: LogLevel) -> bool {
        (**self).is_loggable(domain, tag, level)
    }

    fn emit(&self, domain: u32, tag: &str, level: LogLevel, format: &str, args: &[&str]) {
        (**self).emit(domain, tag, level, format, args)
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn is_loggable(&self, domain: u32, tag: &str, level: LogLevel) -> bool {
        (**self).is_loggable(domain, tag, level)
    }

    fn emit(&self, domain: u32, tag: &str, level: LogLevel, format: &str, args: &[&str]) {
        (**self).emit(domain, tag, level, format, args)
    }
}
