//! Process-wide default logger.
//!
//! A convenience wrapper for callers that want one logger per process. On
//! first use it is built from `LOG_LEVEL` with a stderr sink, unless
//! [`init_global`] installed one before.

use std::sync::OnceLock;

use crate::error::{CloudlogError, CloudlogResult};
use crate::level::Level;
use crate::logger::{Event, Logger};
use crate::severity::Severity;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created on first access.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::builder().from_env().build())
}

/// Install `logger` as the process-wide logger.
///
/// Fails if the global logger was already initialized, either by an earlier
/// call or implicitly by logging through it.
pub fn init_global(logger: Logger) -> CloudlogResult<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| CloudlogError::AlreadyInitialized)
}

/// Set the process-wide threshold from a numeric severity code.
///
/// Takes effect for the next event created from any thread. Unknown codes
/// resolve to INFO.
pub fn set_global_level(code: i32) {
    global().set_severity(code);
}

/// Current process-wide threshold.
pub fn global_level() -> Level {
    global().level()
}

/// Event at any severity on the global logger.
pub fn log(severity: Severity) -> Event<'static> {
    global().log(severity)
}

/// Debug event on the global logger.
pub fn debug() -> Event<'static> {
    global().debug()
}

/// Info event on the global logger.
pub fn info() -> Event<'static> {
    global().info()
}

/// Warning event on the global logger.
pub fn warn() -> Event<'static> {
    global().warn()
}

/// Synonym of [`warn`].
pub fn warning() -> Event<'static> {
    global().warning()
}

/// Error event on the global logger.
pub fn error() -> Event<'static> {
    global().error()
}

/// Fatal event on the global logger. See [`Logger::fatal`] for when this
/// exits the process.
pub fn fatal() -> Event<'static> {
    global().fatal()
}

/// Synonym of [`fatal`].
pub fn critical() -> Event<'static> {
    global().critical()
}

/// Panic event on the global logger. See [`Logger::panic`] for when this
/// panics.
pub fn panic() -> Event<'static> {
    global().panic()
}

/// Synonym of [`panic`].
pub fn alert() -> Event<'static> {
    global().alert()
}
