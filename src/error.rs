//! Error types for directory listing and report writing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to enumerate the contents of one directory.
///
/// The tree renderer turns these into a single inline placeholder line;
/// the flat lister skips the directory.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("permission denied: '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("cannot list '{}': {source}", path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    /// Classify an I/O error raised while listing `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::PermissionDenied {
            ListError::PermissionDenied { path }
        } else {
            ListError::Other { path, source }
        }
    }

    /// Text shown in place of a directory's children when listing fails.
    pub fn placeholder(&self) -> String {
        match self {
            ListError::PermissionDenied { .. } => "[Permission Denied]".to_string(),
            ListError::Other { source, .. } => format!("[Error: {}]", source),
        }
    }
}

/// Unrecoverable failure while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot access '{}': not a directory", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("cannot create '{}'", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_is_classified() {
        let err = ListError::from_io(
            "secret",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(err, ListError::PermissionDenied { .. }));
        assert_eq!(err.placeholder(), "[Permission Denied]");
    }

    #[test]
    fn test_other_error_keeps_message() {
        let err = ListError::from_io("gone", io::Error::other("device vanished"));
        assert!(matches!(err, ListError::Other { .. }));
        assert_eq!(err.placeholder(), "[Error: device vanished]");
    }
}
