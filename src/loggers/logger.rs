use log::{set_boxed_logger, set_max_level, Log, Metadata, Record, SetLoggerError};
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};
use termcolor::WriteColor;

use super::logging::{write_prefix, write_time};
use super::{filelog, termlog};
use crate::{Config, LogError, Severity, SharedDefaults};

/// A named logger writing to the terminal and, optionally, to a log file.
///
/// Each sink has its own threshold: a message is written to a sink when its
/// severity is at or above that sink's threshold. Thresholds and the file path
/// are resolved once, when the logger is built, and never change afterwards.
///
/// # Examples
///
/// ```no_run
/// # use duo_log::*;
/// # fn main() -> Result<(), LogError> {
/// let shared = SharedDefaults::new();
///
/// // The first logger to name a file makes it the default for everyone else
/// let net = Logger::builder(&shared)
///     .name("Net")
///     .term_level(Severity::Info)
///     .file_level(Severity::Verbose)
///     .file_path("app.log")
///     .build()?;
/// net.info("listening")?;
///
/// // Picks up Info on the terminal and Verbose into app.log
/// let db = Logger::builder(&shared).name("Db").build()?;
/// db.debug("pool ready")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Logger {
    name: Option<String>,
    term_level: Severity,
    file_level: Severity,
    file_path: Option<PathBuf>,
    config: Config,
    initialised: bool,
}

/// Collects the optional settings for a [`Logger`].
///
/// Anything left unset is taken from the [`SharedDefaults`] the builder was
/// created with, and failing that from the hard defaults: everything to the
/// terminal, nothing to a file.
#[derive(Debug)]
#[must_use]
pub struct LoggerBuilder<'a> {
    shared: &'a SharedDefaults,
    name: Option<String>,
    term_level: Option<Severity>,
    file_level: Option<Severity>,
    file_path: Option<PathBuf>,
    config: Option<Config>,
}

impl<'a> LoggerBuilder<'a> {
    /// Create a builder with nothing set, falling back on `shared`
    pub fn new(shared: &'a SharedDefaults) -> LoggerBuilder<'a> {
        LoggerBuilder {
            shared,
            name: None,
            term_level: None,
            file_level: None,
            file_path: None,
            config: None,
        }
    }

    /// Name printed in front of every message, as `Name: LEVEL: message`.
    ///
    /// Any `Display` value works; it is rendered once, here.
    ///
    /// ```
    /// # use duo_log::*;
    /// let shared = SharedDefaults::new();
    /// let logger = Logger::builder(&shared).name(7).build().unwrap();
    /// assert_eq!(logger.name(), Some("7"));
    /// ```
    pub fn name(mut self, name: impl Display) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Lowest severity written to the terminal.
    ///
    /// Becomes the shared terminal default if none has been recorded yet.
    pub fn term_level(mut self, level: Severity) -> Self {
        self.term_level = Some(level);
        self
    }

    /// Lowest severity written to the log file.
    ///
    /// Becomes the shared file default if none has been recorded yet. Without a
    /// file path (here or in the shared defaults) the logger still ends up with
    /// `Severity::Disabled` for the file.
    pub fn file_level(mut self, level: Severity) -> Self {
        self.file_level = Some(level);
        self
    }

    /// File to append to. It is created if missing and must be writable.
    ///
    /// Checked when [`build`](LoggerBuilder::build) runs; an existing file gets a
    /// blank separator line.
    pub fn file_path(mut self, path: impl AsRef<Path>) -> Self {
        self.file_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Presentation settings; [`Config::default`] when not given
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Resolves every setting and validates the file path.
    ///
    /// Each setting is taken from the builder, else from the shared defaults,
    /// else from the hard default. Explicit thresholds are recorded in the
    /// shared defaults (where still unset) before the path is checked, so they
    /// stick even if the check fails. The path itself is only recorded once it
    /// has been opened for appending; otherwise a [`LogError::Configuration`]
    /// naming it is returned and the shared path is left alone.
    pub fn build(self) -> Result<Logger, LogError> {
        let shared = self.shared;

        let term_level = self
            .term_level
            .or_else(|| shared.term_level())
            .unwrap_or(Severity::Verbose);
        let mut file_level = self
            .file_level
            .or_else(|| shared.file_level())
            .unwrap_or(Severity::Disabled);

        if let Some(level) = self.term_level {
            shared.set_term_level(level);
        }
        if let Some(level) = self.file_level {
            shared.set_file_level(level);
        }

        if let Some(path) = &self.file_path {
            filelog::preflight(path)?;
        }

        let file_path = self
            .file_path
            .clone()
            .or_else(|| shared.file_path().map(Path::to_path_buf));

        // A file threshold without somewhere to write is meaningless
        if file_path.is_none() {
            file_level = Severity::Disabled;
        }

        if let Some(path) = self.file_path {
            shared.set_file_path(path);
        }

        Ok(Logger {
            name: self.name,
            term_level,
            file_level,
            file_path,
            config: self.config.unwrap_or_default(),
            initialised: true,
        })
    }
}

impl Logger {
    /// Start building a logger that falls back on `shared` for omitted settings
    pub fn builder(shared: &SharedDefaults) -> LoggerBuilder<'_> {
        LoggerBuilder::new(shared)
    }

    /// Build an unnamed logger using only the shared and hard defaults
    ///
    /// ```
    /// # use duo_log::*;
    /// let shared = SharedDefaults::new();
    /// let logger = Logger::new(&shared).unwrap();
    /// assert_eq!(logger.term_level(), Severity::Verbose);
    /// assert_eq!(logger.file_level(), Severity::Disabled);
    /// ```
    pub fn new(shared: &SharedDefaults) -> Result<Logger, LogError> {
        LoggerBuilder::new(shared).build()
    }

    /// init function. Globally installs this Logger as the `log` crate's facility.
    ///
    /// Records from the `log` macros are mapped onto severities (`trace!` becomes
    /// `Verbose`, `warn!` becomes `Warning`) and dispatched as usual. Write errors
    /// are dropped, since `log::Log` has no way to report them.
    /// Fails if another Logger was already initialized, in which case the
    /// global max level is left as it was.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level().to_level_filter();
        set_boxed_logger(Box::new(self))?;
        set_max_level(max_level);
        Ok(())
    }

    /// The name given at build time, without the trailing colon
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Resolved terminal threshold
    pub fn term_level(&self) -> Severity {
        self.term_level
    }

    /// Resolved file threshold; `Disabled` whenever there is no file path
    pub fn file_level(&self) -> Severity {
        self.file_level
    }

    /// Resolved log file, either given explicitly or taken from the shared defaults
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Presentation settings this logger was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The lowest severity either sink accepts
    pub fn max_level(&self) -> Severity {
        self.term_level.min(self.file_level)
    }

    /// Whether a message at `severity` would be written to the terminal
    pub fn enabled_for_terminal(&self, severity: Severity) -> bool {
        severity.passes(self.term_level)
    }

    /// Whether a message at `severity` would be appended to the log file
    pub fn enabled_for_file(&self, severity: Severity) -> bool {
        self.file_path.is_some() && severity.passes(self.file_level)
    }

    /// Writes `message` to the terminal as is: no timestamp, no level, never to the file
    pub fn print(&self, message: impl Display) -> Result<(), LogError> {
        self.check_initialised()?;
        let stream = termlog::open_stream(self.config.terminal_mode, self.config.color_choice, None);
        let mut term_lock = stream.lock();
        let _ = termlog::write_raw_line(&mut term_lock, &message.to_string());
        Ok(())
    }

    /// Log at `Verbose`, unstyled on the terminal
    pub fn verbose(&self, message: impl Display) -> Result<(), LogError> {
        self.emit(Severity::Verbose, message)
    }

    /// Log at `Debug`, bright green on the terminal
    pub fn debug(&self, message: impl Display) -> Result<(), LogError> {
        self.emit(Severity::Debug, message)
    }

    /// Log at `Info`, bright cyan on the terminal
    ///
    /// Returns [`LogError::Configuration`] if the line should go to the log file
    /// and the file cannot be appended to. The terminal line is written either way.
    ///
    /// ```no_run
    /// # use duo_log::*;
    /// # fn main() -> Result<(), LogError> {
    /// let shared = SharedDefaults::new();
    /// let logger = Logger::builder(&shared)
    ///     .name("Worker")
    ///     .file_level(Severity::Info)
    ///     .file_path("worker.log")
    ///     .build()?;
    /// // worker.log: [2024/01/31 12:34:56] Worker: INFO: started
    /// logger.info("started")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn info(&self, message: impl Display) -> Result<(), LogError> {
        self.emit(Severity::Info, message)
    }

    /// Log at `Warning`, bright yellow on the terminal
    pub fn warning(&self, message: impl Display) -> Result<(), LogError> {
        self.emit(Severity::Warning, message)
    }

    /// Log at `Error`, red on the terminal
    pub fn error(&self, message: impl Display) -> Result<(), LogError> {
        self.emit(Severity::Error, message)
    }

    /// Log at `Critical`, black on red on the terminal
    pub fn critical(&self, message: impl Display) -> Result<(), LogError> {
        self.emit(Severity::Critical, message)
    }

    fn check_initialised(&self) -> Result<(), LogError> {
        if self.initialised {
            Ok(())
        } else {
            Err(LogError::InvalidState)
        }
    }

    fn emit(&self, severity: Severity, message: impl Display) -> Result<(), LogError> {
        self.emit_with(severity, message, || {
            termlog::open_stream(
                self.config.terminal_mode,
                self.config.color_choice,
                Some(severity),
            )
        })
    }

    /// Terminal first, then file. A failed file write is returned but the
    /// terminal line has already gone out.
    ///
    /// `open_term` is only called when the terminal accepts `severity`.
    pub(crate) fn emit_with<W, F>(
        &self,
        severity: Severity,
        message: impl Display,
        open_term: F,
    ) -> Result<(), LogError>
    where
        W: WriteColor,
        F: FnOnce() -> W,
    {
        self.check_initialised()?;

        let to_term = self.enabled_for_terminal(severity);
        let to_file = self.enabled_for_file(severity);
        if !to_term && !to_file {
            return Ok(());
        }

        let message = message.to_string();
        if to_term {
            let mut term = open_term();
            let _ = termlog::write_term_line(
                &mut term,
                self.config.level_style(severity),
                &self.term_prefix(severity),
                &message,
            );
        }
        match &self.file_path {
            Some(path) if to_file => filelog::append_line(path, &self.file_line(severity, &message)),
            _ => Ok(()),
        }
    }

    fn term_prefix(&self, severity: Severity) -> String {
        let time = write_time(self.config.term_time_format, self.config.time_offset);
        write_prefix(&time, self.name(), severity)
    }

    fn file_line(&self, severity: Severity, message: &str) -> String {
        let time = write_time(self.config.file_time_format, self.config.time_offset);
        format!("{} {}", write_prefix(&time, self.name(), severity), message)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let severity = Severity::from(metadata.level());
        self.enabled_for_terminal(severity) || self.enabled_for_file(severity)
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = self.emit(Severity::from(record.level()), record.args());
        }
    }

    fn flush(&self) {
        // Nothing is buffered; lines are flushed as they are written
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}
