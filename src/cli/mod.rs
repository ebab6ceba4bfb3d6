//! Command-line interface for genre-minder.
//!
//! Parses the arguments and drives the enrichment loop over a song list.

mod commands;

pub use commands::{Cli, run_command};
