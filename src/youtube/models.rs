//! YouTube Data API v3 search models.
//!
//! Contains the request/result types used by the pipeline and the wire
//! structures of a `search.list` response.

use serde::Deserialize;

/// A single search to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text search phrase
    pub query: String,
    /// YouTube Data API v3 key
    pub api_key: String,
}

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// YouTube video ID
    pub video_id: String,
    /// Video title, still HTML-escaped as returned by the API
    pub title: String,
}

/// YouTube API search/list response wrapper.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Response items
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Next page token for pagination
    #[serde(rename = "nextPageToken")]
    #[allow(dead_code)] // Only the first page is ever requested
    pub next_page_token: Option<String>,
}

/// Item from search.list.
#[derive(Debug, Deserialize)]
pub struct ApiSearchItem {
    pub id: ApiSearchItemId,
    pub snippet: ApiSnippet,
}

/// Resource ID of a search hit.
#[derive(Debug, Deserialize)]
pub struct ApiSearchItemId {
    /// Video ID (present because the search is restricted to `type=video`)
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Snippet from API response.
#[derive(Debug, Deserialize)]
pub struct ApiSnippet {
    /// Video title, empty if the API omits it
    #[serde(default)]
    pub title: String,
}

impl From<ApiSearchItem> for SearchResult {
    fn from(item: ApiSearchItem) -> Self {
        Self {
            video_id: item.id.video_id,
            title: item.snippet.title,
        }
    }
}
