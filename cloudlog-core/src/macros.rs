//! Format-string shorthands over the event builder.
//!
//! `info!(logger, "got {} items", n)` is
//! `logger.info().msg(format_args!("got {} items", n))`. A leading
//! `context: &ctx,` merges a [`ContextSource`](crate::ContextSource).

/// Emit at an explicit [`Severity`](crate::Severity).
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, context: $ctx:expr, $($arg:tt)+) => {
        $logger.log($severity).context($ctx).msg(::core::format_args!($($arg)+))
    };
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity).msg(::core::format_args!($($arg)+))
    };
}

/// Emit at DEBUG.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($rest)+)
    };
}

/// Emit at INFO.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($rest)+)
    };
}

/// Emit at WARNING.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($rest)+)
    };
}

/// Emit at ERROR.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($rest)+)
    };
}

/// Emit at CRITICAL. Exits the process if the logger has `exit_on_fatal`.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($rest)+)
    };
}

/// Emit at ALERT. Panics if the logger has `panic_on_alert`.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($rest)+)
    };
}
