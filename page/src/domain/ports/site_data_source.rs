//! Site data source port trait
//!
//! Defines how the renderer retrieves the raw site data document.

use async_trait::async_trait;

use crate::error::FetchError;

/// Retrieves the raw site data body.
///
/// Implementations perform exactly one request per call and never retry;
/// parsing the body is the renderer's job.
#[async_trait]
pub trait SiteDataSource: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;

    /// Human readable location, used in logs
    fn describe(&self) -> String;
}
