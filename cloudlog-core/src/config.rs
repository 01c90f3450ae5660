//! Configuration loading from cloudlog.toml and the environment.

use std::sync::Arc;
use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{CloudlogError, CloudlogResult, IoResultExt};
use crate::level::Level;
use crate::severity::Severity;
use crate::sink::{Sink, TracingSink, WriterSink};

/// Environment variable holding the initial threshold.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// File name looked up by [`load_config`].
pub const CONFIG_FILE: &str = "cloudlog.toml";

/// Main configuration structure for cloudlog.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Initial threshold, by severity name, backend name, or numeric code.
    pub level: Option<String>,
    /// Exit the process after fatal/critical records.
    pub exit_on_fatal: Option<bool>,
    /// Panic after panic/alert records.
    pub panic_on_alert: Option<bool>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output configuration.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct OutputConfig {
    pub target: Option<OutputTarget>,
}

/// Where records are written.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    Tracing,
}

impl OutputTarget {
    /// Build the sink for this target.
    pub fn make_sink(self) -> Arc<dyn Sink> {
        match self {
            OutputTarget::Stderr => Arc::new(WriterSink::stderr()),
            OutputTarget::Stdout => Arc::new(WriterSink::stdout()),
            OutputTarget::Tracing => Arc::new(TracingSink),
        }
    }
}

impl LoggerConfig {
    /// Configured output target, stderr when unset.
    pub fn output_target(&self) -> OutputTarget {
        self.output
            .as_ref()
            .and_then(|o| o.target)
            .unwrap_or_default()
    }
}

/// Parse a threshold given by name or numeric code.
///
/// Severity names and codes (`WARNING`, `400`) resolve through the severity
/// table; backend names (`warn`, `fatal`, `disabled`) are taken as-is.
pub fn parse_level(raw: &str) -> CloudlogResult<Level> {
    if let Ok(severity) = raw.parse::<Severity>() {
        return Ok(severity.level());
    }
    raw.parse::<Level>()
        .map_err(|_| CloudlogError::invalid_level(raw))
}

/// Threshold string from `LOG_LEVEL`, if set and non-empty.
pub fn env_level() -> Option<String> {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Parse configuration text; `path` is only used for error context.
pub fn parse_config(content: &str, path: &Path) -> CloudlogResult<LoggerConfig> {
    toml::from_str(content).map_err(|e| CloudlogError::config(path, e.to_string()))
}

/// Loads configuration from cloudlog.toml if it exists.
pub fn load_config(root: &Path) -> CloudlogResult<Option<LoggerConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    parse_config(&content, &path).map(Some)
}
