//! Local file site data source, for building against a checked-out site directory

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::DATA_PATH;
use crate::domain::ports::SiteDataSource;
use crate::error::FetchError;

pub struct FileSiteDataSource {
    path: PathBuf,
}

impl FileSiteDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Data document under a site directory (`{dir}/data/site_data.json`)
    pub fn from_site_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DATA_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SiteDataSource for FileSiteDataSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
