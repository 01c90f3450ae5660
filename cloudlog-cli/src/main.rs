//! cloudlog CLI - emit Cloud Logging compatible records from scripts.
//!
//! Features:
//! - One JSON record per invocation on stderr (or stdout)
//! - Severity by Cloud Logging name or numeric code
//! - Threshold from `--level`, `LOG_LEVEL`, or cloudlog.toml
//! - Optional routing through a `tracing` JSON subscriber
//! - Prints the severity mapping table

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use cloudlog_core::{
    init_structured_logging, load_config, Level, Logger, LoggerBuilder, LoggerConfig,
    OutputTarget, Severity, TracingSink, WriterSink,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Emit a Cloud Logging compatible structured log record")]
pub struct Cli {
    /// Message text; multiple words are joined with spaces
    message: Vec<String>,

    /// Severity of the record, by name (WARNING) or code (400)
    #[arg(long, short, default_value = "INFO")]
    severity: String,

    /// Session identifier to attach
    #[arg(long)]
    session_id: Option<String>,

    /// Self/actor identifier to attach
    #[arg(long)]
    self_id: Option<String>,

    /// Minimum level to emit, by name or code
    #[arg(long, env = "LOG_LEVEL")]
    level: Option<String>,

    /// Directory containing cloudlog.toml
    #[arg(long, default_value = ".")]
    config: String,

    /// Write the record to stdout instead of stderr
    #[arg(long, conflicts_with = "tracing")]
    stdout: bool,

    /// Route the record through a tracing JSON subscriber
    #[arg(long)]
    tracing: bool,

    /// Print the severity to level mapping and exit
    #[arg(long)]
    mapping: bool,

    /// Print the mapping as JSON
    #[arg(long, requires = "mapping")]
    json: bool,
}

/// Builds the logger from file config, then threshold override, then output flags.
fn build_logger(cli: &Cli, cfg: Option<&LoggerConfig>) -> Logger {
    let mut builder = LoggerBuilder::new();
    if let Some(cfg) = cfg {
        builder = builder.config(cfg);
    }
    if let Some(level) = cli.level.as_deref().filter(|l| !l.trim().is_empty()) {
        builder = builder.level_str(level);
    }
    if cli.tracing {
        builder = builder.sink(TracingSink);
    } else if cli.stdout {
        builder = builder.sink(WriterSink::stdout());
    }
    builder.build()
}

/// Whether the record ends up in `TracingSink`, from the flag or from
/// `[output] target = "tracing"` when `--stdout` does not override it.
fn routes_through_tracing(cli: &Cli, cfg: Option<&LoggerConfig>) -> bool {
    cli.tracing
        || (!cli.stdout
            && cfg.is_some_and(|c| c.output_target() == OutputTarget::Tracing))
}

/// One row of the mapping table.
fn mapping_rows() -> Vec<(Severity, Level)> {
    Severity::ALL.iter().map(|s| (*s, s.level())).collect()
}

fn print_mapping(json: bool) -> Result<()> {
    let rows = mapping_rows();
    if json {
        let rows: Vec<_> = rows
            .iter()
            .map(|(sev, level)| {
                serde_json::json!({
                    "severity": sev.name(),
                    "code": sev.code(),
                    "level": level.as_str(),
                    "emitted_as": level.severity_name(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{:<10} {:>4}  {:<6} EMITTED AS", "SEVERITY", "CODE", "LEVEL");
        for (sev, level) in rows {
            println!(
                "{:<10} {:>4}  {:<6} {}",
                sev.name(),
                sev.code(),
                level.as_str(),
                level.severity_name()
            );
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    if cli.mapping {
        return print_mapping(cli.json);
    }

    let severity: Severity = cli
        .severity
        .parse()
        .with_context(|| format!("Unknown severity: {}", cli.severity))?;

    let cfg = load_config(Path::new(&cli.config))
        .with_context(|| format!("Failed to load config from: {}", cli.config))?;

    if routes_through_tracing(&cli, cfg.as_ref()) {
        init_structured_logging(Level::Trace);
    }
    let logger = build_logger(&cli, cfg.as_ref());

    let mut event = logger.log(severity);
    if let Some(id) = &cli.session_id {
        event = event.session_id(id.as_str());
    }
    if let Some(id) = &cli.self_id {
        event = event.self_id(id.as_str());
    }
    event.msg(cli.message.join(" "));
    logger.flush();

    Ok(())
}

fn main() -> Result<()> {
    run(Cli::parse())
}
