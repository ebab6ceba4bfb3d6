//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use super::domain::{CatalogSummary, EnrichmentError};

/// Trait for catalog title search.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search by title and return the first page of candidates, in catalog order.
    async fn search(&self, title: &str) -> Result<Vec<CatalogSummary>, EnrichmentError>;
}

#[async_trait]
impl CatalogApi for super::discogs::DiscogsClient {
    async fn search(&self, title: &str) -> Result<Vec<CatalogSummary>, EnrichmentError> {
        self.search(title).await
    }
}
