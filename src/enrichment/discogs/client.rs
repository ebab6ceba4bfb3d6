//! Discogs HTTP client
//!
//! Handles communication with the Discogs database search endpoint.
//! See: https://www.discogs.com/developers
//!
//! IMPORTANT: Discogs requires a User-Agent header. Searching needs a
//! personal access token; without one the API answers 401.

use super::{adapter, dto};
use crate::config::CatalogConfig;
use crate::enrichment::domain::{CatalogSummary, EnrichmentError};

/// Discogs API client
pub struct DiscogsClient {
    http_client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    per_page: u32,
}

impl DiscogsClient {
    /// Create a new client from config and an optional personal access token
    pub fn new(config: &CatalogConfig, token: Option<String>) -> Result<Self, EnrichmentError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| EnrichmentError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
            per_page: config.per_page,
        })
    }

    /// Search by title and return the first page of candidates, in catalog order
    pub async fn search(&self, title: &str) -> Result<Vec<CatalogSummary>, EnrichmentError> {
        let response = self.send_search_request(title).await?;
        if let Some(ref pagination) = response.pagination {
            tracing::debug!(
                "Discogs page {}/{} ({} per page, {} item(s)) for {:?}",
                pagination.page,
                pagination.pages,
                pagination.per_page,
                pagination.items,
                title
            );
        }
        Ok(adapter::to_summaries(response))
    }

    fn search_url(&self) -> String {
        format!("{}/database/search", self.base_url)
    }

    fn authorization(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|token| format!("Discogs token={token}"))
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        title: &str,
    ) -> Result<dto::SearchResponse, EnrichmentError> {
        let per_page = self.per_page.to_string();
        let mut request = self.http_client.get(self.search_url()).query(&[
            ("title", title),
            ("page", "1"),
            ("per_page", per_page.as_str()),
        ]);
        if let Some(auth) = self.authorization() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(EnrichmentError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EnrichmentError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(EnrichmentError::ApiError(error.message));
            }
            return Err(EnrichmentError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
