//! Domain ports (traits)
//!
//! Port traits define interfaces that the renderer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod page;
pub mod site_data_source;

pub use clock::Clock;
pub use page::{MountPoint, PageSink};
pub use site_data_source::SiteDataSource;
