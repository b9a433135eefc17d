//! StellarPulse page renderer
//!
//! Renders the aggregated news feed (`data/site_data.json`) into a static page.
//! Uses a ports & adapters layout: the renderer only sees the `SiteDataSource`,
//! `Clock` and `PageSink` traits.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod view;

#[cfg(test)]
mod test_utils;
