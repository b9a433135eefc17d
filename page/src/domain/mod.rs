//! Domain layer
//!
//! Contains the site data model and the ports the renderer depends on.
//! - `entities`: The feed document and its news items
//! - `markup`: Element trees handed to the page surface
//! - `ports`: Trait definitions for data sources, time and the page surface

pub mod entities;
pub mod markup;
pub mod ports;
