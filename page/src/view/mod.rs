//! View module
//!
//! Formatting helpers and the region builders.

pub mod format;
pub mod renderer;

pub use crate::domain::markup::{Element, Node, ViewAction};
pub use format::NumberLocale;
pub use renderer::RenderContext;
