//! Backend log levels.
//!
//! `Level` is the ordered enum used for filtering and routing. It is not the
//! scale callers think in (see [`crate::severity::Severity`]); it is what the
//! threshold compares against and what the `severity` field is derived from.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing_subscriber::filter::LevelFilter;

use crate::error::CloudlogError;

/// Ordered backend level: `Trace < Debug < Info < Warn < Error < Fatal < Panic < Disabled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Panic = 6,
    Disabled = 7,
}

impl Level {
    /// Every level, lowest first.
    pub const ALL: [Level; 8] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
        Level::Disabled,
    ];

    /// Lower-case backend name.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
            Level::Disabled => "disabled",
        }
    }

    /// Cloud Logging `LogSeverity` name written into the `severity` field.
    ///
    /// See <https://cloud.google.com/logging/docs/reference/v2/rest/v2/LogEntry#LogSeverity>.
    pub fn severity_name(self) -> &'static str {
        match self {
            Level::Trace => "DEFAULT",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "CRITICAL",
            Level::Panic => "ALERT",
            Level::Disabled => "DEFAULT",
        }
    }

    /// Whether a record at `self` passes a threshold of `threshold`.
    pub fn passes(self, threshold: Level) -> bool {
        self != Level::Disabled && self >= threshold
    }

    /// Nearest `tracing` level. Fatal and panic collapse onto ERROR.
    pub fn to_tracing(self) -> Option<tracing::Level> {
        match self {
            Level::Trace => Some(tracing::Level::TRACE),
            Level::Debug => Some(tracing::Level::DEBUG),
            Level::Info => Some(tracing::Level::INFO),
            Level::Warn => Some(tracing::Level::WARN),
            Level::Error | Level::Fatal | Level::Panic => Some(tracing::Level::ERROR),
            Level::Disabled => None,
        }
    }

    /// Filter equivalent for a `tracing-subscriber` stack.
    pub fn to_level_filter(self) -> LevelFilter {
        self.to_tracing().map_or(LevelFilter::OFF, LevelFilter::from_level)
    }

    pub(crate) fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            5 => Level::Fatal,
            6 => Level::Panic,
            _ => Level::Disabled,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = CloudlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "panic" => Ok(Level::Panic),
            "disabled" => Ok(Level::Disabled),
            _ => Err(CloudlogError::invalid_level(s)),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.severity_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_severity_names() {
        let names: Vec<_> = Level::ALL.iter().map(|l| l.severity_name()).collect();
        assert_eq!(
            names,
            vec!["DEFAULT", "DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL", "ALERT", "DEFAULT"]
        );
    }

    #[test]
    fn test_passes() {
        assert!(Level::Warn.passes(Level::Info));
        assert!(Level::Info.passes(Level::Info));
        assert!(!Level::Debug.passes(Level::Info));
        assert!(!Level::Panic.passes(Level::Disabled));
        assert!(!Level::Disabled.passes(Level::Trace));
    }

    #[test]
    fn test_parse_backend_names() {
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" fatal ".parse::<Level>().unwrap(), Level::Fatal);
        assert_eq!("Disabled".parse::<Level>().unwrap(), Level::Disabled);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_u8_roundtrip_and_saturation() {
        for level in Level::ALL {
            assert_eq!(Level::from_u8(level as u8), level);
        }
        assert_eq!(Level::from_u8(200), Level::Disabled);
    }

    #[test]
    fn test_tracing_mapping() {
        assert_eq!(Level::Fatal.to_tracing(), Some(tracing::Level::ERROR));
        assert_eq!(Level::Panic.to_tracing(), Some(tracing::Level::ERROR));
        assert_eq!(Level::Disabled.to_level_filter(), LevelFilter::OFF);
        assert_eq!(Level::Debug.to_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_serializes_as_severity_name() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"WARNING\"");
        assert_eq!(serde_json::to_string(&Level::Fatal).unwrap(), "\"CRITICAL\"");
    }
}
