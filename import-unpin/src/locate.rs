//! Candidate discovery and file I/O.
//!
//! Only the direct children of the target directory are considered, and
//! only files (or symlinks to files) whose name ends in `.{extension}`.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::FixConfig;
use crate::error::FixError;

/// What the locator found in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates {
    /// The target directory does not exist (or is not a directory).
    MissingDirectory,
    /// Matching files, sorted by path. May be empty.
    Files(Vec<PathBuf>),
}

/// Check if the file name ends in `.{extension}`, like a `*.{extension}` glob.
///
/// Unlike `Path::extension`, this also accepts a bare dotfile such as `.tsx`.
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(extension))
        .is_some_and(|stem| stem.ends_with('.'))
}

/// List the candidate files for `config`.
///
/// # Errors
///
/// Returns [`FixError::Walk`] if the directory exists but cannot be listed.
pub fn locate_candidates(config: &FixConfig) -> Result<Candidates, FixError> {
    let root = &config.target_dir;
    if !root.is_dir() {
        return Ok(Candidates::MissingDirectory);
    }

    let mut files = Vec::new();
    for entry_result in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry_result.map_err(|source| FixError::Walk {
            path: source
                .path()
                .map_or_else(|| root.clone(), Path::to_path_buf),
            source,
        })?;

        // `is_file` follows symlinks, so linked components are candidates too.
        // Dangling links and links to directories are skipped.
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }

        if !matches_extension(file_path, &config.extension) {
            continue;
        }

        debug!(path = %file_path.display(), "candidate");
        files.push(file_path.to_path_buf());
    }

    files.sort();
    Ok(Candidates::Files(files))
}

/// Read a whole file as UTF-8.
///
/// # Errors
///
/// Returns [`FixError::Read`] on I/O failure and
/// [`FixError::InvalidEncoding`] if the bytes are not UTF-8.
pub fn read_file(path: &Path) -> Result<String, FixError> {
    let bytes = std::fs::read(path).map_err(|source| FixError::Read {
        path: path.to_owned(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| FixError::InvalidEncoding {
        path: path.to_owned(),
    })
}

/// Overwrite `path` in place with `content`.
///
/// # Errors
///
/// Returns [`FixError::Write`] on I/O failure.
pub fn write_file(path: &Path, content: &str) -> Result<(), FixError> {
    std::fs::write(path, content).map_err(|source| FixError::Write {
        path: path.to_owned(),
        source,
    })
}
