//! CLI definition and dispatch.
//!
//! There is a single workflow: load the song list, then enrich each song
//! in order (see `enrich`).

mod enrich;

use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Builder;

use crate::enrichment::{DiscogsClient, LookupService};
use crate::metadata::{LoftyTagStore, TagWriteOptions};
use crate::prompt::TerminalPrompter;
use crate::{config, songlist};

pub use enrich::{EnrichReport, cmd_enrich};

/// Environment variable holding the Discogs personal access token.
///
/// Get one at https://www.discogs.com/settings/developers
pub const TOKEN_ENV: &str = "DISCOGSTOKEN";

/// Adds genre / style metadata to *.flac files
#[derive(Parser)]
#[command(name = "genre-minder", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a *.txt file listing the *.flac files to enrich, one per line
    #[arg(short, long)]
    pub file_path: PathBuf,
}

/// Run the enrichment workflow for the parsed arguments.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    // Not validated here: a missing token surfaces as a 401 on the first search
    let token = std::env::var(TOKEN_ENV).ok();
    if token.is_none() {
        tracing::debug!("{} is not set", TOKEN_ENV);
    }

    let config = config::load();
    let files = songlist::load(&cli.file_path)?;

    let client = DiscogsClient::new(&config.catalog, token)?;
    let lookup = LookupService::new(client);
    let tags = LoftyTagStore::new(TagWriteOptions::from(&config.tagging));

    let rt = Builder::new_current_thread().enable_all().build()?;
    rt.block_on(cmd_enrich(&files, &tags, &lookup, &TerminalPrompter))?;
    Ok(())
}
