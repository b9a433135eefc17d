use std::env;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{FixedOffset, Local, Offset};

use crate::error::ConfigError;
use crate::view::NumberLocale;

/// Where the site data document comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DataLocation {
    /// Published page URL; data is fetched relative to it
    Url(String),
    /// Local site directory containing `data/site_data.json`
    SiteDir(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data: DataLocation,
    /// Where the rendered page is written
    pub output_path: PathBuf,
    pub locale: NumberLocale,
    /// Unset means the request may hang indefinitely
    pub fetch_timeout: Option<Duration>,
    /// Offset applied to timestamps written without one
    pub naive_offset: FixedOffset,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_dir = PathBuf::from(lookup("PULSE_SITE_DIR").unwrap_or_else(|| "docs".to_string()));

        let data = match lookup("PULSE_SITE_URL").filter(|s| !s.trim().is_empty()) {
            Some(url) => DataLocation::Url(url),
            None => DataLocation::SiteDir(site_dir.clone()),
        };

        let output_path = lookup("PULSE_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| site_dir.join("index.html"));

        let locale = match lookup("PULSE_LOCALE") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "PULSE_LOCALE",
                value,
            })?,
            None => NumberLocale::default(),
        };

        let fetch_timeout = match lookup("PULSE_FETCH_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "PULSE_FETCH_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => None,
        };

        let naive_offset = match lookup("PULSE_UTC_OFFSET_MINUTES") {
            Some(value) => value
                .parse::<i32>()
                .ok()
                .and_then(|minutes| minutes.checked_mul(60))
                .and_then(FixedOffset::east_opt)
                .ok_or(ConfigError::InvalidValue {
                    var: "PULSE_UTC_OFFSET_MINUTES",
                    value,
                })?,
            None => Local::now().offset().fix(),
        };

        Ok(Self {
            data,
            output_path,
            locale,
            fetch_timeout,
            naive_offset,
        })
    }
}
