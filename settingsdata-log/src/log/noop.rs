//! No-operation sink implementation.

use crate::log::{LogLevel, LogSink};

/// A sink for which nothing is loggable.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where the facade's filtering cost is all that should remain
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use settingsdata_log::log::{Log, NoOpSink};
/// use std::sync::Arc;
///
/// let log = Log::new(Arc::new(NoOpSink));
/// log.info("This message is discarded", &[]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl LogSink for NoOpSink {
    #[inline]
    fn is_loggable(&self, _domain: u32, _tag: &str, _level: LogLevel) -> bool {
        false
    }

    #[inline]
    fn emit(&self, _domain: u32, _tag: &str, _level: LogLevel, _format: &str, _args: &[&str]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpSink>();
    }

    #[test]
    fn test_noop_sink_never_loggable() {
        let sink = NoOpSink;
        for level in LogLevel::ALL {
            assert!(!sink.is_loggable(0x0500, "SettingsData", level));
        }
    }

    #[test]
    fn test_noop_sink_as_trait_object() {
        let sink: Box<dyn LogSink> = Box::new(NoOpSink);
        sink.info(0, "t", "test message", &[]);
        sink.debug(0, "t", "debug message", &[]);
        sink.warn(0, "t", "warn message", &[]);
        sink.error(0, "t", "error message", &[]);
        sink.fatal(0, "t", "fatal message", &[]);
    }

    #[test]
    fn test_noop_sink_debug_impl() {
        assert_eq!(format!("{:?}", NoOpSink), "NoOpSink");
    }
}
