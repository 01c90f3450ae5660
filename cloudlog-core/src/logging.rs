//! Structured JSON output through **tracing**, for records routed via
//! [`TracingSink`](crate::sink::TracingSink).
//!
//! Programs that already own a `tracing` subscriber do not need this; they
//! get cloudlog records as ordinary events with a `cloudlog` target and
//! `severity`/`timestamp` fields.

use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use crate::level::Level;

/// Builds the filter: `RUST_LOG` directives when present, else `default`.
pub fn env_filter(default: Level) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_with_directives(default, directives.as_deref())
}

fn filter_with_directives(default: Level, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.to_level_filter().into())
        .parse_lossy(directives.unwrap_or_default())
}

/// JSON formatter that writes one record object per line, the same shape
/// [`WriterSink`](crate::sink::WriterSink) writes.
///
/// Event fields are flattened to the top level. The subscriber's own time,
/// level and target are off: `TracingSink` supplies `timestamp` and
/// `severity` itself.
pub(crate) fn record_json_builder() -> SubscriberBuilder<JsonFields, Format<Json, ()>> {
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_current_span(false)
        .with_span_list(false)
        .with_ansi(false)
}

/// Initializes the global tracing collector (subscriber).
///
/// Call once, early. JSON lines go to stderr; `RUST_LOG` overrides
/// `default`. Returns `false` if another subscriber was already installed.
pub fn init_structured_logging(default: Level) -> bool {
    record_json_builder()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
