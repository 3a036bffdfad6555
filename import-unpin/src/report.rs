//! Run report types.

use std::path::PathBuf;

use crate::transform::StrippedSpecifier;

/// What happened to one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// At least one specifier lost its version; the file was rewritten.
    Fixed {
        /// Specifiers stripped from the file, in file order.
        stripped: Vec<StrippedSpecifier>,
    },
    /// Nothing matched; the file was not touched.
    Unchanged,
}

/// Per-file result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// The candidate file.
    pub path: PathBuf,
    /// Whether it was rewritten.
    pub status: FileStatus,
}

impl FileOutcome {
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self.status, FileStatus::Fixed { .. })
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Result of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FixReport {
    /// The target directory does not exist. Nothing was read or written.
    DirectoryMissing {
        /// Directory that was looked for.
        dir: PathBuf,
    },
    /// The directory exists but holds no file with the target extension.
    NoCandidates {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Extension that was looked for.
        extension: String,
    },
    /// Every candidate was processed.
    Completed {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Extension that was looked for.
        extension: String,
        /// One outcome per candidate, in processing order.
        files: Vec<FileOutcome>,
    },
}

impl FixReport {
    /// Number of candidate files examined.
    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            Self::Completed { files, .. } => files.len(),
            Self::DirectoryMissing { .. } | Self::NoCandidates { .. } => 0,
        }
    }

    /// Number of files rewritten.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.files().iter().filter(|f| f.is_fixed()).count()
    }

    /// Whether any file was rewritten.
    #[must_use]
    pub fn has_fixes(&self) -> bool {
        self.files().iter().any(FileOutcome::is_fixed)
    }

    /// Per-file outcomes (empty unless the run completed).
    #[must_use]
    pub fn files(&self) -> &[FileOutcome] {
        match self {
            Self::Completed { files, .. } => files,
            Self::DirectoryMissing { .. } | Self::NoCandidates { .. } => &[],
        }
    }
}
