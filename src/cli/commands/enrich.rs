//! Per-song enrichment loop.
//!
//! Songs are handled strictly one after another. Any error aborts the whole
//! run; an unverified song is simply left untouched.

use std::path::PathBuf;

use crate::enrichment::{CatalogApi, LookupService};
use crate::error::Result;
use crate::metadata::TagStore;
use crate::prompt::{self, Prompter, UserDecision};

/// Outcome counts of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichReport {
    /// Songs whose tags were read and looked up
    pub processed: usize,
    /// Songs whose genre was written
    pub written: usize,
    /// Songs with no accepted catalog candidate
    pub unverified: usize,
    /// Songs whose confirmed release has no styles
    pub without_styles: usize,
    /// Songs where the user declined the write
    pub declined: usize,
}

/// Enrich every song in list order.
pub async fn cmd_enrich<C: CatalogApi>(
    files: &[PathBuf],
    tags: &dyn TagStore,
    lookup: &LookupService<C>,
    prompter: &dyn Prompter,
) -> Result<EnrichReport> {
    let mut report = EnrichReport::default();

    for (i, path) in files.iter().enumerate() {
        tracing::info!("[{}/{}] {}", i + 1, files.len(), path.display());

        let song = tags.read(path)?;
        let summary = lookup.confirm_match(&song, prompter).await?;
        report.processed += 1;

        if summary.is_empty() {
            report.unverified += 1;
            continue;
        }

        let Some(styles) = summary.styles() else {
            tracing::info!("No styles for {}, nothing to write", path.display());
            report.without_styles += 1;
            continue;
        };

        let question = prompt::write_prompt(&song, &summary, styles);
        match prompter.confirm(&question)? {
            UserDecision::Yes => {
                tags.write_genre(&song.path, styles)?;
                report.written += 1;
            }
            UserDecision::No => {
                tracing::info!("No changes made for {}", path.display());
                report.declined += 1;
            }
        }
    }

    tracing::info!(
        "Done! {} processed, {} written, {} unverified, {} without styles, {} declined",
        report.processed,
        report.written,
        report.unverified,
        report.without_styles,
        report.declined
    );
    Ok(report)
}
