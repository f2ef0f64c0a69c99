//! Recording sink for tests.

use std::collections::BTreeSet;

use parking_lot::Mutex;

use crate::log::{LogLevel, LogSink};

/// An emitted record, captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub domain: u32,
    pub tag: String,
    pub level: LogLevel,
    pub format: String,
    pub args: Vec<String>,
}

/// A loggability query, captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggabilityQuery {
    pub domain: u32,
    pub tag: String,
    pub level: LogLevel,
}

/// A sink that records every query and every emitted record.
///
/// Which levels report as loggable is configurable at runtime, so tests can
/// check both sides of the facade's gate against the same sink.
///
/// # Example
///
/// ```
/// use settingsdata_log::log::{Log, LogLevel, RecordingSink};
/// use std::sync::Arc;
///
/// let sink = Arc::new(RecordingSink::new());
/// sink.set_loggable(LogLevel::Debug, false);
///
/// let log = Log::new(sink.clone());
/// log.debug("dropped", &[]);
/// log.info("kept %{public}s", &["x"]);
///
/// assert_eq!(sink.queries().len(), 2);
/// assert_eq!(sink.emit_count(), 1);
/// ```
#[derive(Debug)]
pub struct RecordingSink {
    loggable: Mutex<BTreeSet<LogLevel>>,
    queries: Mutex<Vec<LoggabilityQuery>>,
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    /// Create a sink for which every level is loggable.
    pub fn new() -> Self {
        Self::with_loggable(LogLevel::ALL)
    }

    /// Create a sink for which no level is loggable.
    pub fn silent() -> Self {
        Self::with_loggable(std::iter::empty())
    }

    /// Create a sink for which exactly the given levels are loggable.
    pub fn with_loggable(levels: impl IntoIterator<Item = LogLevel>) -> Self {
        Self {
            loggable: Mutex::new(levels.into_iter().collect()),
            queries: Mutex::new(Vec::new()),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Change whether `level` reports as loggable.
    pub fn set_loggable(&self, level: LogLevel, loggable: bool) {
        let mut levels = self.loggable.lock();
        if loggable {
            levels.insert(level);
        } else {
            levels.remove(&level);
        }
    }

    /// Records emitted so far, in call order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Loggability queries made so far, in call order.
    pub fn queries(&self) -> Vec<LoggabilityQuery> {
        self.queries.lock().clone()
    }

    /// Number of records emitted so far.
    pub fn emit_count(&self) -> usize {
        self.records.lock().len()
    }

    /// Forget all recorded queries and records. Loggable levels are kept.
    pub fn clear(&self) {
        self.queries.lock().clear();
        self.records.lock().clear();
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for RecordingSink {
    fn is_loggable(&self, domain: u32, tag: &str, level: LogLevel) -> bool {
        self.queries.lock().push(LoggabilityQuery {
            domain,
            tag: tag.to_string(),
            level,
        });
        self.loggable.lock().contains(&level)
    }

    fn emit(&self, domain: u32, tag: &str, level: LogLevel, format: &str, args: &[&str]) {
        self.records.lock().push(LogRecord {
            domain,
            tag: tag.to_string(),
            level,
            format: format.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });
    }
}
