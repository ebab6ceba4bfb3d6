//! Lookup service - finds the catalog release the user agrees with
//!
//! 1. Search the catalog by the song's title (artist is not used as a filter)
//! 2. Walk the first page of candidates in catalog order
//! 3. Ask the user about each one until a candidate is accepted

use crate::enrichment::{domain::CatalogSummary, traits::CatalogApi};
use crate::error::Result;
use crate::metadata::SongFile;
use crate::prompt::{self, Prompter, UserDecision};

/// Service for confirming catalog matches
pub struct LookupService<C> {
    catalog: C,
}

impl<C: CatalogApi> LookupService<C> {
    /// Create a new lookup service on top of a catalog client
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The underlying catalog client
    #[cfg(test)]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Return the first candidate the user accepts.
    ///
    /// With no candidates, or none accepted, logs the unverified song and
    /// returns an empty summary.
    pub async fn confirm_match(
        &self,
        song: &SongFile,
        prompter: &dyn Prompter,
    ) -> Result<CatalogSummary> {
        let candidates = self.catalog.search(&song.title).await?;
        tracing::debug!(
            "{} candidate(s) for {}",
            candidates.len(),
            song.path.display()
        );

        for candidate in candidates {
            let question = prompt::match_prompt(song, &candidate);
            if prompter.confirm(&question)? == UserDecision::Yes {
                return Ok(candidate);
            }
        }

        tracing::error!(
            "Song {} could not be verified based on its metadata\n\ttitle: {}\n\tartist: {}",
            song.path.display(),
            song.title,
            song.artist
        );
        Ok(CatalogSummary::default())
    }
}
