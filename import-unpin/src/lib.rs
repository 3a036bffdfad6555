//! # import-unpin
//!
//! Strips pinned versions from quoted import specifiers in UI component
//! sources, e.g. `"@radix-ui/react-dialog@1.1.6"` becomes
//! `"@radix-ui/react-dialog"`, and rewrites the files that changed.
//!
//! The pure pieces ([`strip_versions`], [`locate_candidates`]) are separate
//! from the driver ([`fix_imports`]), which returns a [`FixReport`] instead
//! of printing. Rendering lives in [`output`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use import_unpin::{FixConfig, fix_imports};
//!
//! let config = FixConfig::for_dir("components/ui");
//! let report = fix_imports(&config).unwrap();
//! println!("{}/{} files fixed", report.fixed_count(), report.total());
//! ```

mod config;
mod error;
mod locate;
pub mod output;
mod report;
mod transform;

pub use config::{DEFAULT_EXTENSION, DEFAULT_TARGET_DIR, FixConfig};
pub use error::FixError;
pub use locate::{Candidates, locate_candidates, read_file, write_file};
pub use report::{FileOutcome, FileStatus, FixReport};
pub use transform::{StrippedSpecifier, Transformation, strip_versions};

use std::path::Path;

use tracing::{debug, info, warn};

/// Strip versioned specifiers from every candidate file under `config`.
///
/// This is the primary public API. Files are handled one at a time; a file
/// is written back only when its content changed.
///
/// # Errors
///
/// Returns the first [`FixError`] hit while listing, reading or writing.
/// Files rewritten before the failure stay rewritten.
/// A missing directory or an empty one is not an error: see
/// [`FixReport::DirectoryMissing`] and [`FixReport::NoCandidates`].
pub fn fix_imports(config: &FixConfig) -> Result<FixReport, FixError> {
    let dir = config.target_dir.clone();

    let files = match locate_candidates(config)? {
        Candidates::MissingDirectory => {
            warn!(dir = %dir.display(), "target directory does not exist");
            return Ok(FixReport::DirectoryMissing { dir });
        }
        Candidates::Files(files) => files,
    };

    if files.is_empty() {
        return Ok(FixReport::NoCandidates {
            dir,
            extension: config.extension.clone(),
        });
    }

    let mut outcomes = Vec::with_capacity(files.len());
    for file_path in &files {
        outcomes.push(fix_file(file_path)?);
    }

    Ok(FixReport::Completed {
        dir,
        extension: config.extension.clone(),
        files: outcomes,
    })
}

/// Read, transform and (if needed) rewrite a single file.
///
/// # Errors
///
/// Returns [`FixError::Read`], [`FixError::InvalidEncoding`] or
/// [`FixError::Write`] on I/O failure.
pub fn fix_file(path: &Path) -> Result<FileOutcome, FixError> {
    let content = read_file(path)?;
    let result = strip_versions(&content);

    if !result.changed {
        debug!(path = %path.display(), "unchanged");
        return Ok(FileOutcome {
            path: path.to_path_buf(),
            status: FileStatus::Unchanged,
        });
    }

    for specifier in &result.stripped {
        debug!(
            path = %path.display(),
            name = %specifier.name,
            version = %specifier.version,
            "stripping version"
        );
    }
    write_file(path, &result.content)?;
    info!(
        path = %path.display(),
        stripped = result.stripped.len(),
        "fixed"
    );

    Ok(FileOutcome {
        path: path.to_path_buf(),
        status: FileStatus::Fixed {
            stripped: result.stripped,
        },
    })
}
