use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a document from disk.
///
/// The store is always left holding a single empty line when this is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }
}

/// Failure to write a document to disk.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("No filename provided")]
    EmptyFilename,

    #[error("Failed to write file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified() {
        let err = LoadError::from_io(
            PathBuf::from("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let err = LoadError::from_io(
            PathBuf::from("locked.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("locked.txt"));
    }

    #[test]
    fn test_save_error_messages() {
        assert_eq!(SaveError::EmptyFilename.to_string(), "No filename provided");
    }
}
