//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use cloudlog_core::prelude::*;
//! ```

// Logger and events
pub use crate::builder::LoggerBuilder;
pub use crate::logger::{Event, Logger};

// Levels and severities
pub use crate::level::Level;
pub use crate::severity::{resolve, Severity};

// Context fields
pub use crate::context::{Context, ContextSource};

// Sinks
pub use crate::sink::{Sink, TracingSink, WriterSink};

// Errors
pub use crate::error::{CloudlogError, CloudlogResult};

// Process-wide logger
pub use crate::global::{global, init_global, set_global_level};
