//! YouTube Data API v3 client implementation.
//!
//! Performs a single `search.list` request and decodes the ranked hits.

use crate::error::SearchError;
use crate::youtube::models::{ApiResponse, ApiSearchItem, SearchRequest, SearchResult};
use reqwest::Client;
use std::time::Duration;

/// Default root of the YouTube Data API.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API v3 client.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL for YouTube Data API
    base_url: String,
}

impl YouTubeClient {
    /// Create a new YouTube client.
    ///
    /// # Returns
    /// * `Result<YouTubeClient, SearchError>` - New client or error
    ///
    /// # Details
    /// Requests time out after 30 seconds.
    pub fn new() -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root (no trailing slash needed).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Search for videos on YouTube.
    ///
    /// # Arguments
    /// * `request` - Query and API key
    ///
    /// # Returns
    /// * `Result<Vec<SearchResult>, SearchError>` - Hits in API ranking order
    ///
    /// # Details
    /// Sends exactly one GET to `{base}/search` with `part=snippet`, `q`,
    /// `type=video` and `key`. Nothing is sent if the query or key is blank.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError> {
        if request.query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if request.api_key.is_empty() {
            return Err(SearchError::MissingApiKey);
        }

        let url = format!("{}/search", self.base_url);
        let params = [
            ("part", "snippet"),
            ("q", request.query.as_str()),
            ("type", "video"),
            ("key", request.api_key.as_str()),
        ];

        log::debug!("GET {} q={:?}", url, request.query);

        // Strip the URL from transport errors: it carries the API key.
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        log::debug!("YouTube API responded with {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api { status, body });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        let results = parse_search_response(&body)?;
        log::debug!("Search returned {} item(s)", results.len());
        Ok(results)
    }
}

/// Decode a `search.list` response body.
///
/// # Arguments
/// * `body` - Raw JSON text
///
/// # Returns
/// * `Result<Vec<SearchResult>, SearchError>` - Hits in order, or a parse error
pub fn parse_search_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let api_response: ApiResponse<ApiSearchItem> = serde_json::from_str(body)?;
    Ok(api_response
        .items
        .into_iter()
        .map(SearchResult::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "kind": "youtube#searchListResponse",
        "nextPageToken": "CAUQAA",
        "items": [
            {
                "id": { "kind": "youtube#video", "videoId": "first111111" },
                "snippet": { "title": "It&#39;s the first" }
            },
            {
                "id": { "kind": "youtube#video", "videoId": "second22222" },
                "snippet": { "title": "Second" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_preserves_ranking_order() {
        let results = parse_search_response(SAMPLE).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].video_id, "first111111");
        assert_eq!(results[0].title, "It&#39;s the first");
        assert_eq!(results[1].video_id, "second22222");
    }

    #[test]
    fn test_parse_empty_items() {
        let results = parse_search_response(r#"{"items": []}"#).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_search_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = parse_search_response(r#"{"items": [{"id": "abc"}]}"#).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = YouTubeClient::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:9/");
        assert_eq!(client.base_url, "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_search_rejects_blank_query_without_request() {
        // Port 9 (discard) would fail to connect if a request were attempted.
        let client = YouTubeClient::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let request = SearchRequest {
            query: "   ".to_string(),
            api_key: "key".to_string(),
        };
        let err = client.search(&request).await.unwrap_err();
        assert!(matches!(err, SearchError::EmptyQuery));
    }

    #[tokio::test]
    async fn test_search_requires_api_key() {
        let client = YouTubeClient::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let request = SearchRequest {
            query: "cats".to_string(),
            api_key: String::new(),
        };
        let err = client.search(&request).await.unwrap_err();
        assert!(matches!(err, SearchError::MissingApiKey));
    }
}
