use std::io::{Error, Write};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::Severity;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum TerminalMode {
    /// Only use Stdout
    #[default]
    Stdout,
    /// Only use Stderr
    Stderr,
    /// Use Stderr for Error and Critical and Stdout otherwise
    Mixed,
}

impl TerminalMode {
    /// `None` is the unleveled `print` output, which always counts as regular output
    pub(crate) fn uses_stderr(self, severity: Option<Severity>) -> bool {
        match self {
            TerminalMode::Stdout => false,
            TerminalMode::Stderr => true,
            TerminalMode::Mixed => {
                matches!(severity, Some(Severity::Error | Severity::Critical))
            }
        }
    }
}

/// Opens the stream a line at `severity` belongs on.
///
/// Streams are not kept between calls; every line is written and flushed
/// straight through.
pub(crate) fn open_stream(
    mode: TerminalMode,
    color_choice: ColorChoice,
    severity: Option<Severity>,
) -> StandardStream {
    if mode.uses_stderr(severity) {
        StandardStream::stderr(color_choice)
    } else {
        StandardStream::stdout(color_choice)
    }
}

/// Writes `prefix message` as one line, styling only the prefix.
///
/// The style is reset before the message so colors never bleed into it.
pub(crate) fn write_term_line<W>(
    term_lock: &mut W,
    style: Option<&ColorSpec>,
    prefix: &str,
    message: &str,
) -> Result<(), Error>
where
    W: WriteColor + ?Sized,
{
    match style {
        Some(spec) => {
            term_lock.set_color(spec)?;
            write!(term_lock, "{}", prefix)?;
            term_lock.reset()?;
        }
        None => write!(term_lock, "{}", prefix)?,
    }
    writeln!(term_lock, " {}", message)?;
    term_lock.flush()
}

/// Writes a raw line with no prefix and no styling
pub(crate) fn write_raw_line<W>(term_lock: &mut W, message: &str) -> Result<(), Error>
where
    W: Write + ?Sized,
{
    writeln!(term_lock, "{}", message)?;
    term_lock.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, Color, NoColor};

    fn render_ansi(style: Option<&ColorSpec>, prefix: &str, message: &str) -> String {
        let mut out = Ansi::new(Vec::new());
        write_term_line(&mut out, style, prefix, message).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn style_wraps_prefix_only() {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));

        let line = render_ansi(Some(&spec), "[12:00:00] ERROR:", "disk full");
        assert!(line.starts_with('\x1b'));
        assert!(line.contains("\x1b[31m[12:00:00] ERROR:"));
        assert!(line.ends_with("ERROR:\x1b[0m disk full\n"));
    }

    #[test]
    fn black_on_red() {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Red));

        let line = render_ansi(Some(&spec), "[12:00:00] CRITICAL:", "boom");
        assert!(line.contains("\x1b[30m"));
        assert!(line.contains("\x1b[41m"));
        assert!(line.ends_with("CRITICAL:\x1b[0m boom\n"));
    }

    #[test]
    fn unstyled_prefix_has_no_escapes() {
        let line = render_ansi(None, "[12:00:00] VERBOSE:", "tick");
        assert_eq!(line, "[12:00:00] VERBOSE: tick\n");
    }

    #[test]
    fn no_color_writer_drops_styles() {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_intense(true);

        let mut out = NoColor::new(Vec::new());
        write_term_line(&mut out, Some(&spec), "[12:00:00] WARNING:", "slow").unwrap();
        assert_eq!(out.into_inner(), b"[12:00:00] WARNING: slow\n");
    }

    #[test]
    fn raw_lines_are_untouched() {
        let mut out = Vec::new();
        write_raw_line(&mut out, "plain output").unwrap();
        assert_eq!(out, b"plain output\n");
    }

    #[test]
    fn mixed_mode_routes_errors_to_stderr() {
        assert!(!TerminalMode::Stdout.uses_stderr(Some(Severity::Critical)));
        assert!(TerminalMode::Stderr.uses_stderr(None));
        assert!(TerminalMode::Mixed.uses_stderr(Some(Severity::Error)));
        assert!(TerminalMode::Mixed.uses_stderr(Some(Severity::Critical)));
        assert!(!TerminalMode::Mixed.uses_stderr(Some(Severity::Warning)));
        assert!(!TerminalMode::Mixed.uses_stderr(None));
    }
}
