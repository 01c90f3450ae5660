//! The per-call log record and its JSON shape.
//!
//! Field names are fixed: collectors key on `severity`, `timestamp`,
//! `message`, `session_id` and `self_id`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::level::Level;

/// A record built for exactly one emission and dropped right after.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord<'a> {
    /// Resolved backend level, written as its Cloud Logging name.
    #[serde(rename = "severity")]
    pub level: Level,

    /// Creation time, RFC 3339 in UTC with second precision.
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_id: Option<&'a str>,

    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Record stamped with the current time.
    pub fn new(level: Level, message: &'a str) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            session_id: None,
            self_id: None,
            message,
        }
    }

    /// Timestamp in the wire encoding.
    pub fn timestamp_string(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// One JSON object, no trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The one timestamp encoding used on the wire.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(ts))
}
