//! Catalog enrichment - finds release metadata for a song on Discogs.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`discogs/dto.rs`) - Exact API response shapes
//! - **Adapter** (`discogs/adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`discogs/client.rs`) - HTTP client for the Discogs API
//! - **Traits** (`traits.rs`) - Seams for swapping the client in tests
//! - **Service** (`service.rs`) - Search plus interactive confirmation
//!
//! # Usage
//!
//! ```ignore
//! use enrichment::{DiscogsClient, LookupService};
//!
//! let client = DiscogsClient::new(&config.catalog, token)?;
//! let service = LookupService::new(client);
//!
//! let summary = service.confirm_match(&song, &TerminalPrompter).await?;
//! if let Some(styles) = summary.styles() {
//!     println!("Styles: {}", styles.join(", "));
//! }
//! ```

pub mod discogs;
pub mod domain;
pub mod service;
pub mod traits;

pub use discogs::DiscogsClient;
pub use domain::{CatalogSummary, EnrichmentError};
pub use service::LookupService;
pub use traits::CatalogApi;
