//! StellarPulse page builder
//!
//! Loads the site data feed once, renders the page and writes it to disk.
//! Exits with status 1 when the feed could not be loaded (the error page is
//! still written).

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stellarpulse_page::adapters::{FileSiteDataSource, HttpSiteDataSource};
use stellarpulse_page::app::build_page;
use stellarpulse_page::config::{Config, DataLocation};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stellarpulse_page=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting StellarPulse page build...");

    let config = Config::from_env().context("Invalid configuration")?;

    let rendered = match &config.data {
        DataLocation::Url(url) => {
            let source = HttpSiteDataSource::new(url, config.fetch_timeout)
                .context("Failed to create HTTP data source")?;
            build_page(source, &config).await?
        }
        DataLocation::SiteDir(dir) => {
            build_page(FileSiteDataSource::from_site_dir(dir), &config).await?
        }
    };

    Ok(if rendered {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
