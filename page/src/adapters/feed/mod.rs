//! Site data feed adapters
//!
//! Retrieve `data/site_data.json` relative to the page, over HTTP or from disk.

pub mod file;
pub mod http;

pub use file::FileSiteDataSource;
pub use http::HttpSiteDataSource;

/// Location of the data document, relative to the page
pub const DATA_PATH: &str = "data/site_data.json";
