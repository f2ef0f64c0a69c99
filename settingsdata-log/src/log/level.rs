//! Severity levels understood by the platform logger.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Log severity, ordered from least to most severe.
///
/// The discriminants are the numeric codes the platform logging
/// subsystem uses for each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Debugging information
    Debug = 3,
    /// General information
    Info = 4,
    /// Warning messages
    Warn = 5,
    /// Error messages
    Error = 6,
    /// Unrecoverable failures
    Fatal = 7,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Platform numeric code for this level.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Upper-case name, as printed in log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a level name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid log level '{input}' - must be one of: debug, info, warn, error, fatal")]
pub struct LevelParseError {
    input: String,
}

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LevelParseError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_all_is_sorted() {
        let mut sorted = LogLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, LogLevel::ALL);
    }

    #[test]
    fn test_platform_codes() {
        assert_eq!(LogLevel::Debug.code(), 3);
        assert_eq!(LogLevel::Info.code(), 4);
        assert_eq!(LogLevel::Warn.code(), 5);
        assert_eq!(LogLevel::Error.code(), 6);
        assert_eq!(LogLevel::Fatal.code(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(LogLevel::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("FATAL".parse::<LogLevel>(), Ok(LogLevel::Fatal));
        assert_eq!(" Warning ".parse::<LogLevel>(), Ok(LogLevel::Warn));
    }

    #[test]
    fn test_parse_roundtrips_display() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_parse_invalid() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }
}
