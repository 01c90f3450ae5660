//! End-to-end test suite for cloudlog-core.

use crate::severity::{ALERT, CRITICAL, DEBUG, DEFAULT, EMERGENCY, ERROR, INFO, NOTICE, WARNING};
use crate::*;
use parking_lot::Mutex;
use serde_json::Value;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Clone, Default)]
struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    fn records(&self) -> Vec<Value> {
        let buffer = self.buffer.lock();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(|line| serde_json::from_str(line).expect("every line is one JSON object"))
            .collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn setup(builder: LoggerBuilder) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = builder.sink(WriterSink::new(capture.clone())).build();
    (logger, capture)
}

const TABLE: [(i32, Level, &str); 9] = [
    (DEFAULT, Level::Info, "INFO"),
    (DEBUG, Level::Debug, "DEBUG"),
    (INFO, Level::Info, "INFO"),
    (NOTICE, Level::Info, "INFO"),
    (WARNING, Level::Warn, "WARNING"),
    (ERROR, Level::Error, "ERROR"),
    (CRITICAL, Level::Fatal, "CRITICAL"),
    (ALERT, Level::Panic, "ALERT"),
    (EMERGENCY, Level::Panic, "ALERT"),
];

// Core Test 1: the threshold splits emission exactly at the mapped level
#[test]
fn test_threshold_splits_at_each_severity() {
    for (code, level, name) in TABLE {
        let (logger, capture) = setup(LoggerBuilder::new());
        logger.set_severity(code);
        assert_eq!(logger.level(), level);

        for sev in Severity::ALL {
            logger.log(sev).msg(sev);
        }

        let records = capture.records();
        let expected: Vec<Severity> = Severity::ALL
            .into_iter()
            .filter(|s| s.level() >= level)
            .collect();
        assert_eq!(records.len(), expected.len(), "threshold {}", code);

        let at_threshold = records
            .iter()
            .find(|r| r["message"] == Severity::from_code(code).unwrap().name())
            .expect("record at the threshold itself is emitted");
        assert_eq!(at_threshold["severity"], name);
    }
}

// Core Test 2: unknown codes behave exactly like INFO
#[test]
fn test_unknown_code_threshold_is_info() {
    let (logger, capture) = setup(LoggerBuilder::new().severity(ERROR));
    logger.set_severity(450);
    assert_eq!(logger.level(), Level::Info);

    logger.debug().msg("below");
    logger.info().msg("at");
    assert_eq!(capture.records().len(), 1);
}

// Core Test 3: session only, self omitted rather than empty
#[test]
fn test_session_without_self() {
    let (logger, capture) = setup(LoggerBuilder::new());
    let ctx = Context::new().with_session_id("abc");
    logger.warn().context(&ctx).msg("partial context");

    let records = capture.records();
    let obj = records[0].as_object().unwrap();
    assert_eq!(obj["session_id"], "abc");
    assert!(!obj.contains_key("self_id"));
}

// Core Test 4: format-string style
#[test]
fn test_format_string_substitution() {
    let (logger, capture) = setup(LoggerBuilder::new());
    crate::info!(logger, "got {} items", 3);
    logger.info().msg(format_args!("got {:>3} items", 3));

    let records = capture.records();
    assert_eq!(records[0]["message"], "got 3 items");
    assert_eq!(records[1]["message"], "got   3 items");
}

// Core Test 5: macros with context
#[test]
fn test_macros_with_context() {
    let (logger, capture) = setup(LoggerBuilder::new().level(Level::Debug));
    let ctx = Context::new().with_session_id("s").with_self_id("me");

    crate::debug!(logger, context: &ctx, "step {}", 1);
    crate::warn!(logger, "plain");
    crate::error!(logger, "code={}", 7);
    crate::fatal!(logger, "fatal but not exiting");
    crate::alert!(logger, context: &ctx, "alert");
    crate::log!(logger, Severity::Notice, "notice {}", "text");

    let records = capture.records();
    let summary: Vec<(String, String)> = records
        .iter()
        .map(|r| {
            (
                r["severity"].as_str().unwrap().to_string(),
                r["message"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("DEBUG".into(), "step 1".into()),
            ("WARNING".into(), "plain".into()),
            ("ERROR".into(), "code=7".into()),
            ("CRITICAL".into(), "fatal but not exiting".into()),
            ("ALERT".into(), "alert".into()),
            ("INFO".into(), "notice text".into()),
        ]
    );
    assert_eq!(records[0]["self_id"], "me");
    assert_eq!(records[4]["session_id"], "s");
    assert!(records[1].get("session_id").is_none());
}

// Core Test 6: a bogus startup level warns once and leaves a working INFO threshold
#[test]
fn test_invalid_startup_level_recovers() {
    let (logger, capture) = setup(LoggerBuilder::new().level_str("bogus"));
    assert_eq!(logger.level(), Level::Info);

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["severity"], "WARNING");
    assert_eq!(
        records[0]["message"],
        "invalid log level (bogus), defaulting to [INFO]"
    );

    logger.warn().msg("after startup");
    logger.debug().msg("still filtered");
    let records = capture.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["message"], "after startup");
}

// Core Test 7: the warning about a bad level is subject to the final threshold
#[test]
fn test_invalid_level_warning_respects_final_threshold() {
    let (logger, capture) = setup(LoggerBuilder::new().level_str("nope").level(Level::Error));
    assert_eq!(logger.level(), Level::Error);
    assert!(capture.records().is_empty());
}

// Core Test 8: every record carries a parseable RFC 3339 timestamp
#[test]
fn test_timestamp_present_and_rfc3339() {
    let (logger, capture) = setup(LoggerBuilder::new());
    logger.error().msg("stamped");

    let record = &capture.records()[0];
    let ts = record["timestamp"].as_str().unwrap();
    assert!(ts.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

// Core Test 9: independent loggers do not share thresholds
#[test]
fn test_loggers_are_independent() {
    let (quiet, quiet_out) = setup(LoggerBuilder::new().level(Level::Error));
    let (loud, loud_out) = setup(LoggerBuilder::new().level(Level::Trace));

    quiet.info().msg("x");
    loud.debug().msg("y");
    loud.set_level(Level::Disabled);
    quiet.error().msg("z");

    assert_eq!(quiet_out.records().len(), 1);
    assert_eq!(loud_out.records().len(), 1);
}

// Core Test 10: config file settings flow into the logger
#[test]
fn test_logger_from_config_text() {
    let cfg = parse_config(
        "level = \"500\"\npanic_on_alert = false\n",
        std::path::Path::new("inline"),
    )
    .unwrap();
    let (logger, capture) = setup(LoggerBuilder::new().config(&cfg));
    assert_eq!(logger.level(), Level::Error);

    logger.warn().msg("dropped");
    logger.critical().msg("kept");
    assert_eq!(capture.records().len(), 1);
}

// Core Test 11: the process-wide logger
//
// The only test in this crate that touches the global logger, so the
// capture logger is installed before anything else initializes it.
#[test]
fn test_global_logger_free_functions() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .sink(WriterSink::new(capture.clone()))
        .build();
    init_global(logger).expect("global logger not yet initialized");

    let ctx = Context::new().with_session_id("g1");
    crate::global::warn().context(&ctx).msg("via global");
    crate::global::debug().msg("below info");
    crate::global::critical().msg(format_args!("disk {}%", 99));
    crate::global::log(Severity::Notice).msg("notice");

    let records = capture.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["severity"], "WARNING");
    assert_eq!(records[0]["message"], "via global");
    assert_eq!(records[0]["session_id"], "g1");
    assert_eq!(records[1]["severity"], "CRITICAL");
    assert_eq!(records[1]["message"], "disk 99%");
    assert_eq!(records[2]["severity"], "INFO");

    for (code, level, _) in TABLE {
        set_global_level(code);
        assert_eq!(global_level(), level, "code {}", code);
    }
    set_global_level(ERROR);
    crate::global::warning().msg("filtered by global threshold");
    crate::global::error().msg("kept");
    assert_eq!(capture.records().len(), 4);
    set_global_level(INFO);

    assert!(matches!(
        init_global(Logger::new()),
        Err(CloudlogError::AlreadyInitialized)
    ));
}
