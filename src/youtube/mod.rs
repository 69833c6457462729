//! YouTube Data API v3 integration module.
//!
//! Provides the search client and its request/result types.

pub mod client;
pub mod models;

pub use client::YouTubeClient;
pub use models::{SearchRequest, SearchResult};
