//! One-shot page build
//!
//! Runs the renderer once against a fresh `HtmlDocument` and writes the
//! result to the configured output path.

use std::sync::Arc;

use anyhow::{Context, Result};

use super::page_renderer::{PageRenderer, PageState, RenderOptions};
use crate::adapters::{HtmlDocument, SystemClock};
use crate::config::Config;
use crate::domain::ports::SiteDataSource;

/// Render once and write the page. Returns whether the data rendered.
///
/// The file is written in both outcomes; only I/O failures are errors.
pub async fn build_page<S: SiteDataSource>(source: S, config: &Config) -> Result<bool> {
    let options = RenderOptions {
        locale: config.locale,
        naive_offset: config.naive_offset,
    };
    let mut renderer = PageRenderer::new(Arc::new(source), Arc::new(SystemClock), options);
    let mut document = HtmlDocument::default();

    let rendered = matches!(renderer.init(&mut document).await, PageState::Rendered(_));

    if let Some(parent) = config.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&config.output_path, document.to_html())
        .await
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    tracing::info!("Wrote {}", config.output_path.display());
    Ok(rendered)
}
