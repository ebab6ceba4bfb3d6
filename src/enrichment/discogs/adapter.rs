//! Adapter layer: Convert Discogs DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::enrichment::domain::{CatalogSummary, field};

/// Separator Discogs puts between artist and title in search hit titles
const ARTIST_TITLE_SEPARATOR: &str = " - ";

/// Convert a page of search results into candidate summaries, keeping order
pub fn to_summaries(response: dto::SearchResponse) -> Vec<CatalogSummary> {
    response.results.into_iter().map(to_summary).collect()
}

/// Convert a single search hit into a summary.
///
/// Fields the hit doesn't carry are logged and left absent.
pub fn to_summary(result: dto::SearchResult) -> CatalogSummary {
    tracing::debug!(
        "Mapping Discogs {} {:?}",
        result.result_type.as_deref().unwrap_or("result"),
        result.id
    );

    let (artists, title) = match result.title {
        Some(full) => split_title(&full),
        None => (None, None),
    };

    let summary = CatalogSummary {
        title,
        artists,
        year: result.year,
        country: result.country,
        labels: result.label,
        format: result.format,
        styles: result.style,
        genres: result.genre,
    };

    log_missing_fields(&summary);
    summary
}

/// Split "Artist - Title" into its parts.
///
/// Without a separator the whole string is the title and no artist is known.
/// Search hits carry a single credit string, so multi-artist releases yield one
/// joined entry and an artist name containing " - " is split at its first dash.
fn split_title(full: &str) -> (Option<Vec<String>>, Option<String>) {
    match full.split_once(ARTIST_TITLE_SEPARATOR) {
        Some((artist, title)) => (Some(vec![artist.to_string()]), Some(title.to_string())),
        None => (None, Some(full.to_string())),
    }
}

fn log_missing_fields(summary: &CatalogSummary) {
    let present = [
        (field::TITLE, summary.title.is_some()),
        (field::ARTISTS, summary.artists.is_some()),
        (field::YEAR, summary.year.is_some()),
        (field::COUNTRY, summary.country.is_some()),
        (field::LABELS, summary.labels.is_some()),
        (field::FORMAT, summary.format.is_some()),
        (field::STYLES, summary.styles.is_some()),
        (field::GENRES, summary.genres.is_some()),
    ];

    for (name, _) in present.iter().filter(|(_, present)| !present) {
        tracing::error!("'{}' not found in Discogs API response", name);
    }
}
