use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned while building a [`Logger`](crate::Logger) or logging through one
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened or appended to
    #[error("invalid file path or insufficient permissions on file '{}'", path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A logging method was called on a logger that never finished initialising
    #[error("logger has not been initialised")]
    InvalidState,
}

impl LogError {
    pub(crate) fn configuration(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Configuration {
            path: path.into(),
            source,
        }
    }

    /// The offending file path, for configuration errors
    pub fn path(&self) -> Option<&Path> {
        match self {
            LogError::Configuration { path, .. } => Some(path),
            LogError::InvalidState => None,
        }
    }
}
