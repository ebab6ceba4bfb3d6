//! Discogs API Data Transfer Objects
//!
//! These types match what the Discogs `/database/search` endpoint returns.
//! DO NOT use these types outside the discogs module - convert to domain types.
//!
//! API Reference: https://www.discogs.com/developers#page:database,header:database-search
//!
//! Every field of a search result is optional: artist and label hits carry a
//! much smaller set of fields than release and master hits.

use serde::{Deserialize, Serialize};

/// Search response (one page of results)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// Pagination block of a search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub items: u32,
}

/// A single search hit (release, master, artist or label)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    pub id: Option<u64>,
    /// Result type: "release", "master", "artist" or "label"
    #[serde(rename = "type")]
    pub result_type: Option<String>,
    /// For releases and masters: "Artist - Title"
    pub title: Option<String>,
    /// Release year, as a string
    pub year: Option<String>,
    pub country: Option<String>,
    pub label: Option<Vec<String>>,
    pub format: Option<Vec<String>>,
    pub style: Option<Vec<String>>,
    pub genre: Option<Vec<String>>,
}

/// Error response from the Discogs API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
