//! HTTP site data source

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use super::DATA_PATH;
use crate::domain::ports::SiteDataSource;
use crate::error::FetchError;

/// Fetches the data document relative to a published page URL
pub struct HttpSiteDataSource {
    http: Client,
    url: Url,
}

impl HttpSiteDataSource {
    /// Resolve the data URL against `page_url` the way a browser resolves
    /// a relative path: `https://host/pulse/` and `https://host/pulse/index.html`
    /// both yield `https://host/pulse/data/site_data.json`.
    pub fn new(page_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let base = Url::parse(page_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", page_url, e)))?;
        let url = base
            .join(DATA_PATH)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", page_url, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SiteDataSource for HttpSiteDataSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .http
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
