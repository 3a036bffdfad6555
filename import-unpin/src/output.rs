//! Plain-text rendering of a [`FixReport`].
//!
//! Kept separate from the driver so runs can be inspected without capturing
//! stdout. Color/terminal handling is left to the caller.

use std::io::Write;

use crate::report::{FileStatus, FixReport};

/// Follow-up advice printed when at least one file was rewritten.
pub const NEXT_STEPS: &[&str] = &[
    "1. Review the changes (e.g. with `git diff`)",
    "2. Run `npm run dev` to check the app still builds",
];

/// Format a `FixReport` as human-readable text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &FixReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    match report {
        FixReport::DirectoryMissing { dir } => {
            writeln!(writer, "error: directory {} does not exist", dir.display())?;
            writeln!(
                writer,
                "  Make sure to run this tool from the project root."
            )?;
        }
        FixReport::NoCandidates { dir, extension } => {
            writeln!(
                writer,
                "error: no .{extension} files found in {}",
                dir.display()
            )?;
        }
        FixReport::Completed {
            dir,
            extension,
            files,
        } => {
            writeln!(
                writer,
                "Found {} .{extension} file(s) in {}",
                files.len(),
                dir.display()
            )?;
            writeln!(writer)?;

            for file in files {
                match &file.status {
                    FileStatus::Fixed { stripped } => writeln!(
                        writer,
                        "  fixed:     {} ({} specifier(s))",
                        file.display_name(),
                        stripped.len()
                    )?,
                    FileStatus::Unchanged => {
                        writeln!(writer, "  unchanged: {}", file.display_name())?;
                    }
                }
            }

            writeln!(writer)?;
            writeln!(
                writer,
                "Done: {}/{} file(s) fixed.",
                report.fixed_count(),
                report.total()
            )?;

            if report.has_fixes() {
                writeln!(writer)?;
                writeln!(writer, "Next steps:")?;
                for step in NEXT_STEPS {
                    writeln!(writer, "  {step}")?;
                }
            }
        }
    }

    Ok(())
}
