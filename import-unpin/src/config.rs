//! Configuration for an unpin run.
//!
//! The tool is invoked without arguments, so `Default` carries the layout it
//! was written for. Tests and library callers override the fields directly.

use std::path::PathBuf;

/// Directory scanned by default, relative to the working directory.
pub const DEFAULT_TARGET_DIR: &str = "components/ui";

/// File extension (without the leading dot) scanned by default.
pub const DEFAULT_EXTENSION: &str = "tsx";

/// Where to look for component files and which ones to pick.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FixConfig {
    /// Directory whose direct children are scanned (not recursive).
    pub target_dir: PathBuf,
    /// Extension a file must carry to be a candidate, without the leading
    /// dot. Matched like a `*.{extension}` glob, case-sensitive.
    pub extension: String,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}

impl FixConfig {
    /// Config rooted at `target_dir` with the default extension.
    #[must_use]
    pub fn for_dir(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }
}
