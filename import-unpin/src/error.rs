//! Error types for an unpin run.
//!
//! A missing target directory or an empty one is not an error; those are
//! reported through [`crate::FixReport`]. Anything here aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure while locating, reading or rewriting a file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FixError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The rewritten content could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    InvalidEncoding {
        /// File that failed.
        path: PathBuf,
    },

    /// Listing the target directory failed (permission denied, etc.).
    #[error("failed to list {}: {source}", path.display())]
    Walk {
        /// Directory or entry that failed.
        path: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },
}

impl FixError {
    /// Path the failure relates to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::InvalidEncoding { path }
            | Self::Walk { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_mentions_path() {
        let err = FixError::Read {
            path: PathBuf::from("components/ui/button.tsx"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("components/ui/button.tsx"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
        assert_eq!(err.path(), std::path::Path::new("components/ui/button.tsx"));
    }

    #[test]
    fn test_invalid_encoding_message() {
        let err = FixError::InvalidEncoding {
            path: PathBuf::from("a.tsx"),
        };
        assert_eq!(err.to_string(), "a.tsx is not valid UTF-8");
    }
}
