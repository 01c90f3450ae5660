//! Application severity scale and its resolution onto backend levels.
//!
//! Callers speak the Cloud Logging `LogSeverity` scale (DEFAULT=0 through
//! EMERGENCY=800, in steps of 100). The backend only knows [`Level`], so
//! every severity resolves to exactly one level:
//!
//! | Severity  | Code | Level |
//! |-----------|------|-------|
//! | DEFAULT   | 0    | info  |
//! | DEBUG     | 100  | debug |
//! | INFO      | 200  | info  |
//! | NOTICE    | 300  | info  |
//! | WARNING   | 400  | warn  |
//! | ERROR     | 500  | error |
//! | CRITICAL  | 600  | fatal |
//! | ALERT     | 700  | panic |
//! | EMERGENCY | 800  | panic |
//!
//! The top of the scale is compressed: ALERT and EMERGENCY are
//! indistinguishable once resolved. Codes in the gaps are not severities.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CloudlogError;
use crate::level::Level;

/// Numeric code of DEFAULT.
pub const DEFAULT: i32 = 0;
/// Numeric code of DEBUG.
pub const DEBUG: i32 = 100;
/// Numeric code of INFO.
pub const INFO: i32 = 200;
/// Numeric code of NOTICE.
pub const NOTICE: i32 = 300;
/// Numeric code of WARNING.
pub const WARNING: i32 = 400;
/// Numeric code of ERROR.
pub const ERROR: i32 = 500;
/// Numeric code of CRITICAL.
pub const CRITICAL: i32 = 600;
/// Numeric code of ALERT.
pub const ALERT: i32 = 700;
/// Numeric code of EMERGENCY.
pub const EMERGENCY: i32 = 800;

/// One of the nine application severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Default,
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl Severity {
    /// All severities in ascending code order.
    pub const ALL: [Severity; 9] = [
        Severity::Default,
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    /// Numeric code on the Cloud Logging scale.
    pub fn code(self) -> i32 {
        match self {
            Severity::Default => DEFAULT,
            Severity::Debug => DEBUG,
            Severity::Info => INFO,
            Severity::Notice => NOTICE,
            Severity::Warning => WARNING,
            Severity::Error => ERROR,
            Severity::Critical => CRITICAL,
            Severity::Alert => ALERT,
            Severity::Emergency => EMERGENCY,
        }
    }

    /// Look up a severity by its exact code.
    pub fn from_code(code: i32) -> Option<Severity> {
        Severity::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Upper-case Cloud Logging name.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Alert => "ALERT",
            Severity::Emergency => "EMERGENCY",
        }
    }

    /// Backend level this severity is emitted and filtered at.
    pub fn level(self) -> Level {
        match self {
            Severity::Default | Severity::Info | Severity::Notice => Level::Info,
            Severity::Debug => Level::Debug,
            Severity::Warning => Level::Warn,
            Severity::Error => Level::Error,
            Severity::Critical => Level::Fatal,
            Severity::Alert | Severity::Emergency => Level::Panic,
        }
    }
}

/// Resolve a numeric severity code to its backend level.
///
/// Total over `i32`: codes that are not one of the nine severities fall back
/// to [`Level::Info`] instead of failing.
pub fn resolve(code: i32) -> Level {
    Severity::from_code(code).map_or(Level::Info, Severity::level)
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = CloudlogError;

    /// Accepts a Cloud Logging name (any case) or one of the nine codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i32>() {
            return Severity::from_code(code).ok_or_else(|| CloudlogError::invalid_level(s));
        }
        let upper = trimmed.to_ascii_uppercase();
        Severity::ALL
            .into_iter()
            .find(|sev| sev.name() == upper)
            .ok_or_else(|| CloudlogError::invalid_level(s))
    }
}
