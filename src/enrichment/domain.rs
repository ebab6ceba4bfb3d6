//! Internal domain models for catalog lookups.
//!
//! These types are OUR types - they don't change when the Discogs API changes.
//! All external API responses get converted into these types via adapters.

/// Field summary of one catalog candidate.
///
/// Each field is independently present or absent. Absent fields are never
/// filled with placeholders, so an empty summary means "nothing confirmed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub title: Option<String>,
    pub artists: Option<Vec<String>>,
    /// Release year as reported by the catalog (free text, usually `YYYY`)
    pub year: Option<String>,
    pub country: Option<String>,
    pub labels: Option<Vec<String>>,
    /// Media formats (Vinyl, CD, File, ...)
    pub format: Option<Vec<String>>,
    pub styles: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
}

/// Display names for summary fields, in presentation order
pub mod field {
    pub const TITLE: &str = "Title";
    pub const ARTISTS: &str = "Artists";
    pub const YEAR: &str = "Year";
    pub const COUNTRY: &str = "Country";
    pub const LABELS: &str = "Labels";
    pub const FORMAT: &str = "Format";
    pub const STYLES: &str = "Styles";
    pub const GENRES: &str = "Genres";
}

impl CatalogSummary {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Styles worth writing: present and non-empty
    pub fn styles(&self) -> Option<&[String]> {
        self.styles.as_deref().filter(|styles| !styles.is_empty())
    }

    /// Present fields as `(name, rendered value)` pairs, lists joined with `, `
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let text = |name: &'static str, value: &Option<String>| {
            value.as_ref().map(|v| (name, v.clone()))
        };
        let list = |name: &'static str, value: &Option<Vec<String>>| {
            value.as_ref().map(|v| (name, v.join(", ")))
        };

        [
            text(field::TITLE, &self.title),
            list(field::ARTISTS, &self.artists),
            text(field::YEAR, &self.year),
            text(field::COUNTRY, &self.country),
            list(field::LABELS, &self.labels),
            list(field::FORMAT, &self.format),
            list(field::STYLES, &self.styles),
            list(field::GENRES, &self.genres),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Errors that can occur while talking to the catalog
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Unauthorized - check the DISCOGSTOKEN environment variable")]
    Unauthorized,

    #[error("Rate limited - try again later")]
    RateLimited,
}
