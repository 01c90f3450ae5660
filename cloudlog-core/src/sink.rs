//! Destinations for finished records.
//!
//! A [`Sink`] owns encoding and I/O. Failures stay inside the sink: the
//! caller of a logging function never sees them.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::level::Level;
use crate::record::LogRecord;

/// Where records go once they have passed the threshold.
pub trait Sink: Send + Sync {
    /// Write one record. Must not panic on I/O failure.
    fn write(&self, record: &LogRecord<'_>);

    /// Flush buffered output, if any.
    fn flush(&self) {}
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, record: &LogRecord<'_>) {
        (**self).write(record);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, record: &LogRecord<'_>) {
        (**self).write(record);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

/// JSON lines written to any `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take the writer back, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<io::Stderr> {
    /// Sink on the process's standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriterSink<io::Stdout> {
    /// Sink on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, record: &LogRecord<'_>) {
        let line = match record.to_json() {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(target: "cloudlog", error = %e, "failed to encode log record");
                return;
            }
        };

        // One locked write per record so concurrent lines never interleave.
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{}", line) {
            tracing::warn!(target: "cloudlog", error = %e, "failed to write log record");
        }
    }

    fn flush(&self) {
        if let Err(e) = self.writer.lock().flush() {
            tracing::warn!(target: "cloudlog", error = %e, "failed to flush log sink");
        }
    }
}

/// Forwards records into the `tracing` dispatcher.
///
/// Fatal and panic records are sent at ERROR, the most severe level
/// `tracing` has; the record's own level survives in the `severity` field.
/// `timestamp` is the record's own second-precision stamp, so a subscriber
/// built by [`init_structured_logging`](crate::logging::init_structured_logging)
/// prints the same object [`WriterSink`] does.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

macro_rules! forward_event {
    ($lvl:expr, $record:expr) => {
        tracing::event!(
            target: "cloudlog",
            $lvl,
            severity = $record.level.severity_name(),
            timestamp = %$record.timestamp_string(),
            session_id = $record.session_id,
            self_id = $record.self_id,
            "{}",
            $record.message
        )
    };
}

impl Sink for TracingSink {
    fn write(&self, record: &LogRecord<'_>) {
        match record.level {
            Level::Trace => forward_event!(tracing::Level::TRACE, record),
            Level::Debug => forward_event!(tracing::Level::DEBUG, record),
            Level::Info => forward_event!(tracing::Level::INFO, record),
            Level::Warn => forward_event!(tracing::Level::WARN, record),
            Level::Error | Level::Fatal | Level::Panic => {
                forward_event!(tracing::Level::ERROR, record)
            }
            Level::Disabled => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_writer_sink_writes_json_lines() {
        let sink = WriterSink::new(Vec::new());
        sink.write(&LogRecord::new(Level::Info, "first"));
        sink.write(&LogRecord::new(Level::Error, "second"));

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["severity"], "ERROR");
        assert_eq!(second["message"], "second");
    }

    #[test]
    fn test_writer_failure_is_swallowed() {
        let sink = WriterSink::new(FailingWriter);
        sink.write(&LogRecord::new(Level::Warn, "lost"));
        sink.flush();
    }

    #[test]
    fn test_shared_sink_through_arc() {
        let sink = Arc::new(WriterSink::new(Vec::new()));
        let as_dyn: Arc<dyn Sink> = sink.clone();
        as_dyn.write(&LogRecord::new(Level::Debug, "via arc"));
        drop(as_dyn);

        let inner = Arc::try_unwrap(sink).ok().unwrap().into_inner();
        assert!(String::from_utf8(inner).unwrap().contains("via arc"));
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        // No subscriber installed: forwarding is a no-op, not a panic.
        let sink = TracingSink;
        for level in Level::ALL {
            sink.write(&LogRecord::new(level, "noop"));
        }
    }
}
