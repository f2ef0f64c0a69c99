//! Subscriber output configuration.

use std::path::{Path, PathBuf};

use super::defaults::{DEFAULT_FILTER, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};

/// Configuration for [`init_logging`](crate::logging::init_logging).
///
/// # Example
///
/// ```
/// use settingsdata_log::config::LoggingConfig;
///
/// let config = LoggingConfig::new()
///     .with_log_dir("/tmp/settings")
///     .with_default_filter("debug");
/// assert_eq!(config.log_path().to_str(), Some("/tmp/settings/settingsdata.log"));
///
/// let console_only = LoggingConfig::new().without_file();
/// assert!(!console_only.file_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    log_dir: PathBuf,
    log_file: String,
    file_enabled: bool,
    default_filter: String,
    ansi: bool,
}

impl LoggingConfig {
    /// Create a logging configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory log files are written to.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Set the log file name.
    pub fn with_log_file(mut self, file: impl Into<String>) -> Self {
        self.log_file = file.into();
        self
    }

    /// Log to stdout only.
    pub fn without_file(mut self) -> Self {
        self.file_enabled = false;
        self
    }

    /// Set the filter used when `RUST_LOG` is not set.
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Enable or disable ANSI colors on stdout.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    pub fn file_enabled(&self) -> bool {
        self.file_enabled
    }

    pub fn default_filter(&self) -> &str {
        &self.default_filter
    }

    pub fn ansi(&self) -> bool {
        self.ansi
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_file: DEFAULT_LOG_FILE.to_string(),
            file_enabled: true,
            default_filter: DEFAULT_FILTER.to_string(),
            ansi: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = LoggingConfig::default();
        assert_eq!(config.log_dir(), Path::new("logs"));
        assert_eq!(config.log_file(), "settingsdata.log");
        assert_eq!(config.log_path(), PathBuf::from("logs/settingsdata.log"));
        assert!(config.file_enabled());
        assert_eq!(config.default_filter(), "info");
        assert!(config.ansi());
    }

    #[test]
    fn test_builder_chain() {
        let config = LoggingConfig::new()
            .with_log_dir("out")
            .with_log_file("app.log")
            .with_default_filter("warn")
            .with_ansi(false);

        assert_eq!(config.log_path(), PathBuf::from("out/app.log"));
        assert_eq!(config.default_filter(), "warn");
        assert!(!config.ansi());
        assert!(config.file_enabled()); // Unchanged
    }

    #[test]
    fn test_without_file() {
        let config = LoggingConfig::new().without_file();
        assert!(!config.file_enabled());
        assert_eq!(config.log_file(), DEFAULT_LOG_FILE); // Unchanged
    }
}
