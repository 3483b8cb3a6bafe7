//! Leveled logging to the terminal and an optional log file.
//!
//! Every [`Logger`] has two sinks with their own thresholds. The terminal gets
//! short timestamps and per-severity colors; the file gets full dates and plain
//! text, appended one line at a time.
//!
//! Settings a logger is not given come from a [`SharedDefaults`], which remembers
//! the first explicit terminal level, file level and file path it sees. Build the
//! first logger with full configuration during startup and every later logger can
//! be built with just a name.
//!
//! ```no_run
//! # use duo_log::*;
//! # fn main() -> Result<(), LogError> {
//! let shared = SharedDefaults::new();
//! Logger::builder(&shared)
//!     .term_level(Severity::Info)
//!     .file_level(Severity::Debug)
//!     .file_path("service.log")
//!     .build()?;
//!
//! let worker = Logger::builder(&shared).name("Worker").build()?;
//! worker.info("started")?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod loggers;
mod severity;
mod shared;

pub use self::config::{format_description, Config, ConfigBuilder, FormatItem, UtcOffset};
pub use self::error::LogError;
pub use self::loggers::{Logger, LoggerBuilder, TerminalMode};
pub use self::severity::{ParseSeverityError, Severity};
pub use self::shared::SharedDefaults;

pub use termcolor::{Color, ColorChoice, ColorSpec};
