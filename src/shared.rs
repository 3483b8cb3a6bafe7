use crate::Severity;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Fallback configuration shared by every [`Logger`](crate::Logger) built from it.
///
/// Each field is written at most once, by the first logger that is given an
/// explicit value for it. Later loggers that omit the value pick it up from here.
/// Create one per application and hand it to each [`LoggerBuilder`](crate::LoggerBuilder),
/// wrapping it in an `Arc` if several owners need it.
///
/// # Examples
///
/// ```
/// # use duo_log::*;
/// let shared = SharedDefaults::new();
/// assert!(shared.set_term_level(Severity::Warning));
/// assert!(!shared.set_term_level(Severity::Debug));
/// assert_eq!(shared.term_level(), Some(Severity::Warning));
/// ```
#[derive(Debug, Default)]
pub struct SharedDefaults {
    term_level: OnceLock<Severity>,
    file_level: OnceLock<Severity>,
    file_path: OnceLock<PathBuf>,
}

impl SharedDefaults {
    /// Create an empty set of defaults; every field starts unset
    pub fn new() -> SharedDefaults {
        SharedDefaults::default()
    }

    /// Terminal threshold recorded by the first logger that set one
    pub fn term_level(&self) -> Option<Severity> {
        self.term_level.get().copied()
    }

    /// File threshold recorded by the first logger that set one
    pub fn file_level(&self) -> Option<Severity> {
        self.file_level.get().copied()
    }

    /// Log file recorded by the first logger whose path passed validation
    ///
    /// ```
    /// # use duo_log::*;
    /// let shared = SharedDefaults::new();
    /// assert_eq!(shared.file_path(), None);
    /// shared.set_file_path("app.log");
    /// assert_eq!(shared.file_path(), Some(std::path::Path::new("app.log")));
    /// ```
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.get().map(PathBuf::as_path)
    }

    /// Record the terminal threshold unless one is already present.
    ///
    /// Returns `true` if this call set the value, `false` if one was already present
    pub fn set_term_level(&self, level: Severity) -> bool {
        self.term_level.set(level).is_ok()
    }

    /// Record the file threshold unless one is already present.
    ///
    /// Returns `true` if this call set the value, `false` if one was already present
    pub fn set_file_level(&self, level: Severity) -> bool {
        self.file_level.set(level).is_ok()
    }

    /// Record the log file unless one is already present. The path is not
    /// validated here; [`LoggerBuilder::build`](crate::LoggerBuilder::build) only
    /// calls this after opening it successfully.
    ///
    /// Returns `true` if this call set the value, `false` if one was already present
    pub fn set_file_path(&self, path: impl Into<PathBuf>) -> bool {
        self.file_path.set(path.into()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let shared = SharedDefaults::new();
        assert_eq!(shared.term_level(), None);
        assert_eq!(shared.file_level(), None);
        assert_eq!(shared.file_path(), None);
    }

    #[test]
    fn first_write_wins() {
        let shared = SharedDefaults::new();
        assert!(shared.set_file_level(Severity::Info));
        assert!(!shared.set_file_level(Severity::Critical));
        assert_eq!(shared.file_level(), Some(Severity::Info));

        assert!(shared.set_file_path("first.log"));
        assert!(!shared.set_file_path("second.log"));
        assert_eq!(shared.file_path(), Some(Path::new("first.log")));
    }

    #[test]
    fn fields_are_independent() {
        let shared = SharedDefaults::new();
        shared.set_term_level(Severity::Error);
        assert_eq!(shared.term_level(), Some(Severity::Error));
        assert_eq!(shared.file_level(), None);
    }
}
