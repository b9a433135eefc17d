//! Application layer
//!
//! Orchestrates loading the site data and rendering the page through the ports.

pub mod page_builder;
pub mod page_renderer;

pub use page_builder::build_page;
pub use page_renderer::{PageRenderer, PageState, RenderOptions};
