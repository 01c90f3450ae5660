//! Builder pattern API for constructing a [`Logger`].
//!
//! ```rust,ignore
//! use cloudlog_core::prelude::*;
//!
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .from_env()
//!     .sink(WriterSink::stdout())
//!     .exit_on_fatal(true)
//!     .build();
//! ```
//!
//! Level sources are applied in call order, the last one wins. An invalid
//! level string does not fail the build: the threshold falls back to INFO
//! and the finished logger emits one WARNING record naming the bad value.

use std::sync::Arc;

use crate::config::{self, LoggerConfig};
use crate::level::Level;
use crate::logger::Logger;
use crate::severity;
use crate::sink::{Sink, WriterSink};

/// Builder for configuring a [`Logger`].
#[derive(Clone)]
pub struct LoggerBuilder {
    /// Threshold to install
    level: Level,

    /// Destination, stderr when unset
    sink: Option<Arc<dyn Sink>>,

    /// Exit after fatal records
    exit_on_fatal: bool,

    /// Panic after alert records
    panic_on_alert: bool,

    /// Raw level strings that failed to parse, reported on build
    rejected_levels: Vec<String>,
}

impl LoggerBuilder {
    /// Builder with INFO threshold, stderr sink, and termination off.
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            sink: None,
            exit_on_fatal: false,
            panic_on_alert: false,
            rejected_levels: Vec::new(),
        }
    }

    /// Set the threshold from a backend level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the threshold from a numeric severity code.
    pub fn severity(mut self, code: i32) -> Self {
        self.level = severity::resolve(code);
        self
    }

    /// Set the threshold from a name or numeric code.
    ///
    /// Unparseable input resets the threshold to INFO and is reported as a
    /// warning once the logger is built.
    pub fn level_str(mut self, raw: &str) -> Self {
        match config::parse_level(raw) {
            Ok(level) => self.level = level,
            Err(_) => {
                self.level = Level::Info;
                self.rejected_levels.push(raw.to_string());
            }
        }
        self
    }

    /// Apply `LOG_LEVEL` if it is set and non-empty.
    pub fn from_env(self) -> Self {
        match config::env_level() {
            Some(raw) => self.level_str(&raw),
            None => self,
        }
    }

    /// Apply everything a [`LoggerConfig`] sets.
    pub fn config(mut self, cfg: &LoggerConfig) -> Self {
        if let Some(raw) = cfg.level.as_deref() {
            self = self.level_str(raw);
        }
        if let Some(exit) = cfg.exit_on_fatal {
            self.exit_on_fatal = exit;
        }
        if let Some(panic) = cfg.panic_on_alert {
            self.panic_on_alert = panic;
        }
        if cfg.output.is_some() {
            self.sink = Some(cfg.output_target().make_sink());
        }
        self
    }

    /// Write records to `sink`.
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Write records to a sink shared with other owners.
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Exit the process after fatal/critical records.
    pub fn exit_on_fatal(mut self, enabled: bool) -> Self {
        self.exit_on_fatal = enabled;
        self
    }

    /// Panic after panic/alert records.
    pub fn panic_on_alert(mut self, enabled: bool) -> Self {
        self.panic_on_alert = enabled;
        self
    }

    /// Threshold the built logger will start with.
    pub fn current_level(&self) -> Level {
        self.level
    }

    /// Build the logger and report any rejected level strings through it.
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(WriterSink::stderr()));
        let logger = Logger::from_parts(self.level, sink, self.exit_on_fatal, self.panic_on_alert);

        for raw in &self.rejected_levels {
            logger
                .warn()
                .msg(format_args!("invalid log level ({}), defaulting to [INFO]", raw));
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("level", &self.level)
            .field("has_sink", &self.sink.is_some())
            .field("exit_on_fatal", &self.exit_on_fatal)
            .field("panic_on_alert", &self.panic_on_alert)
            .field("rejected_levels", &self.rejected_levels)
            .finish()
    }
}
