use std::io::Write;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use import_unpin::{FixConfig, fix_imports, output};

use crate::logging;

/// Strip pinned versions from import specifiers in `components/ui/*.tsx`.
///
/// Run from the project root. Files are rewritten in place, without backup.
#[derive(Debug, Parser)]
#[command(name = "import-unpin", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments, set up logging and run against the default layout.
///
/// # Errors
/// Returns an error if a candidate file cannot be read or written, or if the
/// report cannot be written to stdout.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    execute(&FixConfig::default(), &mut stdout.lock())
}

fn execute(config: &FixConfig, writer: &mut dyn Write) -> Result<()> {
    let report = fix_imports(config).with_context(|| {
        format!(
            "fixing imports in {} aborted",
            config.target_dir.display()
        )
    })?;
    output::write_human(&report, writer)
}
