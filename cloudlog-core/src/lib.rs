//! cloudlog-core: a severity-mapped structured logging facade.
//!
//! Callers log on the Cloud Logging severity scale (DEFAULT..EMERGENCY);
//! each record is resolved onto an ordered backend [`Level`], filtered
//! against the logger's threshold, and written as one JSON object carrying
//! `severity`, `timestamp`, `message` and, when known, `session_id` and
//! `self_id`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cloudlog_core::prelude::*;
//!
//! let logger = Logger::builder().from_env().build();
//! let ctx = Context::new().with_session_id("abc");
//!
//! logger.info().context(&ctx).msg(format_args!("got {} items", 3));
//! cloudlog_core::warn!(logger, "retrying in {}s", 5);
//! ```
//!
//! # Module Organization
//!
//! - [`severity`]: the nine-value application scale and [`resolve`]
//! - [`level`]: backend levels and the `severity` field names
//! - [`logger`]: [`Logger`] and the per-call [`Event`] builder
//! - [`builder`]: fluent construction from code, config, and environment
//! - [`sink`]: JSON-lines and `tracing` destinations
//! - [`global`]: the process-wide convenience logger
//! - [`config`]: `cloudlog.toml` and `LOG_LEVEL`
//! - [`logging`]: `tracing-subscriber` bootstrap for the `tracing` sink
//!
//! # Termination
//!
//! Fatal/critical and panic/alert events return normally unless the logger
//! is built with `exit_on_fatal(true)` or `panic_on_alert(true)`.

pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod logging;
pub mod prelude;
pub mod record;
pub mod severity;
pub mod sink;

mod macros;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Error types
pub use error::{CloudlogError, CloudlogResult, IoResultExt};

// Builder API
pub use builder::LoggerBuilder;

// Logger and events
pub use logger::{Event, Logger, FATAL_EXIT_CODE};

// Levels and severities
pub use level::Level;
pub use severity::{resolve, Severity};

// Context
pub use context::{Context, ContextSource};

// Records and sinks
pub use record::{format_timestamp, LogRecord};
pub use sink::{Sink, TracingSink, WriterSink};

// Configuration
pub use config::{
    env_level, load_config, parse_config, parse_level, LoggerConfig, OutputConfig, OutputTarget,
    CONFIG_FILE, LOG_LEVEL_ENV,
};

// Process-wide logger
pub use global::{global, global_level, init_global, set_global_level};

// Logging
pub use logging::{env_filter, init_structured_logging};

#[cfg(test)]
mod tests;
