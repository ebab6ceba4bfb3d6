//! Genre Minder - adds Discogs style metadata to FLAC files.
//!
//! Reads a list of FLAC files, looks each one up on Discogs by title, asks
//! the user to confirm the matching release, and writes the release's styles
//! into the file's genre tag after a second confirmation.

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod metadata;
pub mod prompt;
pub mod songlist;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; source locations go into every line
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(EnvFilter::from_default_env().add_directive("genre_minder=info".parse()?))
        .init();

    if let Err(e) = cli::run_command(&args) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
