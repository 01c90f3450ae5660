//! The severity-mapped logger and its per-call event builder.
//!
//! ```rust,ignore
//! let logger = Logger::builder().sink(WriterSink::stderr()).build();
//! logger.warn().context(&ctx).msg(format_args!("got {} items", 3));
//! ```
//!
//! Each entry point (`debug`, `info`, `warn`, ...) has a fixed severity. The
//! threshold is checked once, when the [`Event`] is created; a suppressed
//! event never formats its message and never touches the sink.

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::builder::LoggerBuilder;
use crate::context::ContextSource;
use crate::level::Level;
use crate::record::LogRecord;
use crate::severity::{self, Severity};
use crate::sink::{Sink, WriterSink};

/// Exit status used when a fatal record terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// A logger owning its threshold, sink, and termination policy.
///
/// Independent loggers never share state, so tests can build as many as
/// they like. Use [`crate::global`] for a process-wide instance.
pub struct Logger {
    threshold: AtomicU8,
    sink: Arc<dyn Sink>,
    exit_on_fatal: bool,
    panic_on_alert: bool,
}

impl Logger {
    pub(crate) fn from_parts(
        threshold: Level,
        sink: Arc<dyn Sink>,
        exit_on_fatal: bool,
        panic_on_alert: bool,
    ) -> Self {
        Self {
            threshold: AtomicU8::new(threshold as u8),
            sink,
            exit_on_fatal,
            panic_on_alert,
        }
    }

    /// Start configuring a logger.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logger at INFO writing JSON lines to stderr, with termination off.
    pub fn new() -> Self {
        Self::from_parts(Level::Info, Arc::new(WriterSink::stderr()), false, false)
    }

    /// Current minimum level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Acquire))
    }

    /// Install a new minimum level for every subsequent event.
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Release);
    }

    /// Install a new minimum from a numeric severity code.
    ///
    /// Unknown codes resolve to INFO, see [`severity::resolve`].
    pub fn set_severity(&self, code: i32) {
        self.set_level(severity::resolve(code));
    }

    /// Whether a record at `level` would currently be written.
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.level())
    }

    /// Whether fatal events terminate the process.
    pub fn exits_on_fatal(&self) -> bool {
        self.exit_on_fatal
    }

    /// Whether panic/alert events panic the calling thread.
    pub fn panics_on_alert(&self) -> bool {
        self.panic_on_alert
    }

    /// Flush the underlying sink.
    pub fn flush(&self) {
        self.sink.flush();
    }

    /// Event at any of the nine severities.
    pub fn log(&self, severity: Severity) -> Event<'_> {
        self.event_at(severity.level())
    }

    /// Debug or trace information.
    pub fn debug(&self) -> Event<'_> {
        self.log(Severity::Debug)
    }

    /// Routine information, such as ongoing status or performance.
    pub fn info(&self) -> Event<'_> {
        self.log(Severity::Info)
    }

    /// Events that might cause problems.
    pub fn warn(&self) -> Event<'_> {
        self.log(Severity::Warning)
    }

    /// Synonym of [`Logger::warn`].
    pub fn warning(&self) -> Event<'_> {
        self.warn()
    }

    /// Events likely to cause problems.
    pub fn error(&self) -> Event<'_> {
        self.log(Severity::Error)
    }

    /// Critical events causing severe problems or outages.
    ///
    /// Terminates the process with [`FATAL_EXIT_CODE`] after emission when
    /// the logger was built with `exit_on_fatal(true)`; otherwise returns
    /// normally.
    pub fn fatal(&self) -> Event<'_> {
        self.log(Severity::Critical)
    }

    /// Synonym of [`Logger::fatal`], including its termination behavior.
    pub fn critical(&self) -> Event<'_> {
        self.fatal()
    }

    /// A person must take action immediately.
    ///
    /// Panics the calling thread with the message after emission when the
    /// logger was built with `panic_on_alert(true)`; otherwise returns
    /// normally.
    pub fn panic(&self) -> Event<'_> {
        self.log(Severity::Alert)
    }

    /// Synonym of [`Logger::panic`], including its panic behavior.
    pub fn alert(&self) -> Event<'_> {
        self.panic()
    }

    fn event_at(&self, level: Level) -> Event<'_> {
        Event {
            logger: self,
            level,
            enabled: self.enabled(level),
            session_id: None,
            self_id: None,
        }
    }

    fn emit(&self, level: Level, message: &str, session_id: Option<&str>, self_id: Option<&str>) {
        let record = LogRecord {
            session_id,
            self_id,
            ..LogRecord::new(level, message)
        };
        self.sink.write(&record);
    }

    /// Apply the termination policy after an event at `level` was handled.
    fn finish(&self, level: Level, message: &str) {
        match level {
            Level::Fatal if self.exit_on_fatal => {
                self.sink.flush();
                std::process::exit(FATAL_EXIT_CODE);
            }
            Level::Panic if self.panic_on_alert => {
                self.sink.flush();
                panic!("{}", message);
            }
            _ => {}
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("exit_on_fatal", &self.exit_on_fatal)
            .field("panic_on_alert", &self.panic_on_alert)
            .finish_non_exhaustive()
    }
}

/// A record under construction. Nothing is written until [`Event::msg`]
/// or [`Event::send`].
#[must_use = "an event does nothing until `msg` or `send` is called"]
pub struct Event<'a> {
    logger: &'a Logger,
    level: Level,
    enabled: bool,
    session_id: Option<String>,
    self_id: Option<String>,
}

impl Event<'_> {
    /// Backend level this event will be written at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether the threshold let this event through.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Copy `session_id` and `self_id` from `ctx` where present.
    ///
    /// Absent identifiers leave any value already set untouched.
    pub fn context(mut self, ctx: &impl ContextSource) -> Self {
        if !self.enabled {
            return self;
        }
        if let Some(id) = ctx.session_id() {
            self.session_id = Some(id.to_owned());
        }
        if let Some(id) = ctx.self_id() {
            self.self_id = Some(id.to_owned());
        }
        self
    }

    pub fn session_id(mut self, id: impl Into<String>) -> Self {
        if self.enabled {
            self.session_id = Some(id.into());
        }
        self
    }

    pub fn self_id(mut self, id: impl Into<String>) -> Self {
        if self.enabled {
            self.self_id = Some(id.into());
        }
        self
    }

    /// Emit with `message`.
    ///
    /// Accepts a plain string or `format_args!(..)`, so both the
    /// pre-formatted and the format-string calling styles work.
    pub fn msg(self, message: impl Display) {
        let needs_text = self.enabled || self.terminates();
        let text = if needs_text {
            message.to_string()
        } else {
            String::new()
        };
        self.dispatch(&text);
    }

    /// Emit with an empty message.
    pub fn send(self) {
        self.dispatch("");
    }

    fn terminates(&self) -> bool {
        (self.level == Level::Fatal && self.logger.exit_on_fatal)
            || (self.level == Level::Panic && self.logger.panic_on_alert)
    }

    fn dispatch(self, message: &str) {
        if self.enabled {
            self.logger.emit(
                self.level,
                message,
                self.session_id.as_deref(),
                self.self_id.as_deref(),
            );
        }
        self.logger.finish(self.level, message);
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("level", &self.level)
            .field("enabled", &self.enabled)
            .field("session_id", &self.session_id)
            .field("self_id", &self.self_id)
            .finish()
    }
}
