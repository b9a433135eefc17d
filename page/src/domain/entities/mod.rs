//! Domain entities
//!
//! The site data document as produced by the upstream aggregator.

use serde::{Deserialize, Deserializer};

pub mod category;
pub mod news_item;
pub mod site_data;

pub use category::{category_emoji, Category, DEFAULT_CATEGORY_EMOJI};
pub use news_item::NewsItem;
pub use site_data::{SiteData, SiteInfo, Stats};

/// Helper to deserialize null as default (empty vec, empty string, zero)
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
