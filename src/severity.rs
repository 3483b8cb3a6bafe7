use log::{Level, LevelFilter};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log message, in ascending order of urgency.
///
/// `Disabled` is only meaningful as a threshold: no message is ever logged at it,
/// so a sink whose threshold is `Disabled` never emits anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Verbose = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
    Disabled = 6,
}

impl Severity {
    /// Every severity a message can be logged at, lowest first.
    pub const MESSAGE_LEVELS: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Label written into log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Disabled => "DISABLED",
        }
    }

    /// Whether a message at `self` passes a sink whose threshold is `threshold`.
    ///
    /// ```
    /// # use duo_log::Severity;
    /// assert!(Severity::Info.passes(Severity::Info));
    /// assert!(!Severity::Debug.passes(Severity::Info));
    /// assert!(!Severity::Critical.passes(Severity::Disabled));
    /// ```
    pub fn passes(self, threshold: Severity) -> bool {
        self != Severity::Disabled && self >= threshold
    }

    /// The closest `log` crate filter for this threshold.
    ///
    /// `Error` and `Critical` both map to `LevelFilter::Error`, since `log` has no
    /// level above error.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Severity::Verbose => LevelFilter::Trace,
            Severity::Debug => LevelFilter::Debug,
            Severity::Info => LevelFilter::Info,
            Severity::Warning => LevelFilter::Warn,
            Severity::Error | Severity::Critical => LevelFilter::Error,
            Severity::Disabled => LevelFilter::Off,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => Severity::Verbose,
            Level::Debug => Severity::Debug,
            Level::Info => Severity::Info,
            Level::Warn => Severity::Warning,
            Level::Error => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{0}`")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VERBOSE" | "TRACE" => Ok(Severity::Verbose),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            "DISABLED" | "OFF" => Ok(Severity::Disabled),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_totally_ordered() {
        let mut all = Severity::MESSAGE_LEVELS.to_vec();
        all.push(Severity::Disabled);
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
        assert_eq!(Severity::Verbose as u8, 0);
        assert_eq!(Severity::Disabled as u8, 6);
    }

    #[test]
    fn passes_at_and_above_threshold_only() {
        for threshold in Severity::MESSAGE_LEVELS {
            for message in Severity::MESSAGE_LEVELS {
                assert_eq!(message.passes(threshold), message >= threshold);
            }
        }
        assert!(Severity::Warning.passes(Severity::Warning));
        assert!(!Severity::Info.passes(Severity::Warning));
    }

    #[test]
    fn disabled_threshold_blocks_everything() {
        for message in Severity::MESSAGE_LEVELS {
            assert!(!message.passes(Severity::Disabled));
        }
        assert!(!Severity::Disabled.passes(Severity::Verbose));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" CRITICAL ".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!("off".parse::<Severity>(), Ok(Severity::Disabled));

        let err = "loud".parse::<Severity>().unwrap_err();
        assert_eq!(err.to_string(), "unknown severity `loud`");
    }

    #[test]
    fn maps_log_levels() {
        assert_eq!(Severity::from(Level::Trace), Severity::Verbose);
        assert_eq!(Severity::from(Level::Warn), Severity::Warning);
        assert_eq!(Severity::Critical.to_level_filter(), LevelFilter::Error);
        assert_eq!(Severity::Disabled.to_level_filter(), LevelFilter::Off);
    }
}
