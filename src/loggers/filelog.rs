//! File sink: pre-flight validation and per-line appends

use crate::LogError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Checks that `path` can be appended to, creating the file if it is missing.
///
/// An existing file gets a blank line so the new session is visually separated
/// from what is already there. The handle is closed again before returning; the
/// path is re-opened on every write.
pub(crate) fn preflight(path: &Path) -> Result<(), LogError> {
    let existed = path.is_file();
    let mut file = open_append(path).map_err(|err| LogError::configuration(path, err))?;
    if existed {
        file.write_all(b"\n")
            .map_err(|err| LogError::configuration(path, err))?;
    }
    Ok(())
}

/// Opens `path`, appends `line` plus a newline, and closes it again
pub(crate) fn append_line(path: &Path, line: &str) -> Result<(), LogError> {
    let mut file = open_append(path).map_err(|err| LogError::configuration(path, err))?;
    writeln!(file, "{}", line).map_err(|err| LogError::configuration(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn preflight_creates_missing_file_without_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.log");

        preflight(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn preflight_separates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.log");
        fs::write(&path, "earlier line\n").unwrap();

        preflight(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier line\n\n");
    }

    #[test]
    fn preflight_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = preflight(dir.path()).unwrap_err();
        assert_eq!(err.path(), Some(dir.path()));
    }

    #[test]
    fn preflight_rejects_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("app.log");

        let err = preflight(&path).unwrap_err();
        assert!(err.to_string().contains("app.log"));
    }

    #[test]
    fn append_line_adds_newline_each_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.log");

        append_line(&path, "one").unwrap();
        append_line(&path, "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn append_line_recreates_deleted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.log");
        preflight(&path).unwrap();
        fs::remove_file(&path).unwrap();

        append_line(&path, "back").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "back\n");
    }
}
