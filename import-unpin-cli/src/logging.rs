//! Log setup for the CLI.
//!
//! Events go to stderr so they never interleave with the report on stdout.
//! `RUST_LOG` wins over `-v` when set.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
