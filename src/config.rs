use crate::loggers::TerminalMode;
use crate::Severity;
use std::sync::OnceLock;

use termcolor::{Color, ColorChoice, ColorSpec};
pub use time::{format_description::FormatItem, macros::format_description, UtcOffset};

/// Presentation settings for a [`Logger`](crate::Logger)
///
/// Terminal lines are written as `[12:34:56] Name: LEVEL: message`, with the part
/// before the message styled per severity. File lines are written as
/// `[2024/01/31 12:34:56] Name: LEVEL: message` and are never styled.
///
/// Timestamps use the local offset when the `local-offset` feature is on (the
/// default). The offset is looked up once per process, the first time a default
/// `Config` is made; if it cannot be determined soundly at that point (typically
/// because other threads are already running) UTC is used from then on. Call
/// [`ConfigBuilder::set_time_offset`] to pin it explicitly.
///
/// Construct using [`Default`](Config::default) or using [`ConfigBuilder`]
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) level_style: [Option<ColorSpec>; 6],
    pub(crate) term_time_format: &'static [FormatItem<'static>],
    pub(crate) file_time_format: &'static [FormatItem<'static>],
    pub(crate) time_offset: UtcOffset,
    pub(crate) terminal_mode: TerminalMode,
    pub(crate) color_choice: ColorChoice,
}

impl Config {
    /// Create a new default `ConfigBuilder`
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Style applied to the terminal prefix of a message at `severity`, if any
    pub fn level_style(&self, severity: Severity) -> Option<&ColorSpec> {
        self.level_style
            .get(severity as usize)
            .and_then(Option::as_ref)
    }

    /// Which standard stream(s) terminal lines go to
    pub fn terminal_mode(&self) -> TerminalMode {
        self.terminal_mode
    }

    /// When terminal output is styled
    pub fn color_choice(&self) -> ColorChoice {
        self.color_choice
    }

    /// Offset applied to both terminal and file timestamps
    pub fn time_offset(&self) -> UtcOffset {
        self.time_offset
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ConfigBuilder(Config);

impl ConfigBuilder {
    /// Create a new default ConfigBuilder
    pub fn new() -> ConfigBuilder {
        ConfigBuilder(Config::default())
    }

    /// Set the foreground color used for the terminal prefix of `severity`,
    /// or None to leave it unstyled
    ///
    /// `Severity::Disabled` is never logged, so setting its color has no effect.
    pub fn set_level_color(&mut self, severity: Severity, color: Option<Color>) -> &mut ConfigBuilder {
        let style = color.map(|c| {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(c));
            spec
        });
        self.set_level_style(severity, style)
    }

    /// Set the full terminal style (colors, intensity, weight) for `severity`
    pub fn set_level_style(&mut self, severity: Severity, style: Option<ColorSpec>) -> &mut ConfigBuilder {
        if let Some(slot) = self.0.level_style.get_mut(severity as usize) {
            *slot = style;
        }
        self
    }

    /// Sets the timestamp format used on the terminal.
    ///
    /// *Note*: The default is `[hour]:[minute]:[second]`. The timestamp is always
    /// wrapped in square brackets.
    ///
    /// # Usage
    ///
    /// ```
    /// # use duo_log::{ConfigBuilder, format_description};
    /// let config = ConfigBuilder::new()
    ///     .set_term_time_format(format_description!("[hour]:[minute]:[second].[subsecond digits:3]"))
    ///     .build();
    /// ```
    pub fn set_term_time_format(
        &mut self,
        time_format: &'static [FormatItem<'static>],
    ) -> &mut ConfigBuilder {
        self.0.term_time_format = time_format;
        self
    }

    /// Sets the timestamp format used in the log file.
    ///
    /// *Note*: The default is `[year]/[month]/[day] [hour]:[minute]:[second]`.
    pub fn set_file_time_format(
        &mut self,
        time_format: &'static [FormatItem<'static>],
    ) -> &mut ConfigBuilder {
        self.0.file_time_format = time_format;
        self
    }

    /// Set offset used for logging time
    pub fn set_time_offset(&mut self, offset: UtcOffset) -> &mut ConfigBuilder {
        self.0.time_offset = offset;
        self
    }

    /// Sets the offset used to the current local time offset
    /// (overriding values previously set by [`ConfigBuilder::set_time_offset`]).
    ///
    /// This function may fail if the offset cannot be determined soundly.
    /// This may be the case, when the program is multi-threaded by the time of calling this function.
    #[cfg(feature = "local-offset")]
    pub fn set_time_offset_to_local(&mut self) -> Result<&mut ConfigBuilder, &mut ConfigBuilder> {
        match UtcOffset::current_local_offset() {
            Ok(offset) => {
                self.0.time_offset = offset;
                Ok(self)
            }
            Err(_) => Err(self),
        }
    }

    /// Choose which standard stream(s) terminal lines go to (default is Stdout)
    pub fn set_terminal_mode(&mut self, mode: TerminalMode) -> &mut ConfigBuilder {
        self.0.terminal_mode = mode;
        self
    }

    /// Choose when terminal output is styled (default is Auto)
    pub fn set_color_choice(&mut self, choice: ColorChoice) -> &mut ConfigBuilder {
        self.0.color_choice = choice;
        self
    }

    /// Build new `Config`
    pub fn build(&mut self) -> Config {
        self.0.clone()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder::new()
    }
}

fn default_level_style() -> [Option<ColorSpec>; 6] {
    let mut debug = ColorSpec::new();
    debug.set_fg(Some(Color::Green)).set_intense(true);

    let mut info = ColorSpec::new();
    info.set_fg(Some(Color::Cyan)).set_intense(true);

    let mut warning = ColorSpec::new();
    warning.set_fg(Some(Color::Yellow)).set_intense(true);

    let mut error = ColorSpec::new();
    error.set_fg(Some(Color::Red));

    let mut critical = ColorSpec::new();
    critical.set_fg(Some(Color::Black)).set_bg(Some(Color::Red));

    [
        None, // Verbose
        Some(debug),
        Some(info),
        Some(warning),
        Some(error),
        Some(critical),
    ]
}

static DEFAULT_TIME_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

fn default_time_offset() -> UtcOffset {
    *DEFAULT_TIME_OFFSET.get_or_init(|| {
        #[cfg(feature = "local-offset")]
        {
            UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
        }
        #[cfg(not(feature = "local-offset"))]
        {
            UtcOffset::UTC
        }
    })
}

impl Default for Config {
    fn default() -> Config {
        Config {
            level_style: default_level_style(),
            term_time_format: format_description!("[hour]:[minute]:[second]"),
            file_time_format: format_description!(
                "[year]/[month]/[day] [hour]:[minute]:[second]"
            ),
            time_offset: default_time_offset(),
            terminal_mode: TerminalMode::default(),
            color_choice: ColorChoice::Auto,
        }
    }
}
