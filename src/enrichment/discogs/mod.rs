//! Discogs API integration
//!
//! Title search against the Discogs database, mapped into catalog summaries.
//!
//! API docs: https://www.discogs.com/developers

pub mod dto;
mod adapter;
mod client;

pub use client::DiscogsClient;
