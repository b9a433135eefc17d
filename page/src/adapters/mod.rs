//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod clock;
pub mod document;
pub mod feed;

pub use clock::SystemClock;
pub use document::HtmlDocument;
pub use feed::{FileSiteDataSource, HttpSiteDataSource};
