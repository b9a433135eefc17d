//! Unified error types for the page renderer
//!
//! This module defines error types for each layer:
//! - `FetchError`: Retrieving the site data resource failed
//! - `ParseError`: The resource body is not a valid site data document
//! - `LoadError`: Either of the above, as seen by the renderer
//! - `ConfigError`: Invalid environment configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while retrieving the site data resource
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid data URL: {0}")]
    InvalidUrl(String),
}

/// Errors raised when the fetched body does not match the expected shape
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed site data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load errors - everything that sends the renderer to the error view
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(ParseError::Json(e))
    }
}

/// Configuration errors surfaced at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}
