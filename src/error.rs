//! Error types for credential loading and the search request.
//!
//! Every variant is fatal to the CLI; `main` reports it and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the YouTube API key.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `$HOME` could not be resolved
    #[error("Failed to determine home directory")]
    HomeDirUnavailable,
    /// The credential file is missing, unreadable or malformed
    #[error("Failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    /// The file was read but has no usable `YOUTUBE_API_KEY`
    #[error("YOUTUBE_API_KEY not found in {}", .path.display())]
    MissingApiKey { path: PathBuf },
}

/// Failure while querying the search endpoint.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search query must not be empty")]
    EmptyQuery,
    #[error("YouTube API key is required")]
    MissingApiKey,
    /// Transport failure: DNS, connect, TLS, timeout or body read
    #[error("Failed to reach YouTube API")]
    Network(#[from] reqwest::Error),
    /// The API answered with a non-success status
    #[error("YouTube API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to parse search response")]
    Parse(#[from] serde_json::Error),
}
