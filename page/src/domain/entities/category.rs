//! Category domain entity
//!
//! A news category (ai, robotics, space, ...) as listed in the site data.

use serde::Deserialize;

use super::deserialize_null_default;

/// Emoji shown for items whose category key is not known
pub const DEFAULT_CATEGORY_EMOJI: &str = "📰";

/// A category tile entry, keyed by its category key in `SiteData::categories`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    /// Localized (Chinese) display name
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name_cn: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub emoji: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub count: u64,
}

/// Resolve the badge emoji for a category key.
///
/// This is a fixed lookup, independent of the emoji carried by the
/// `categories` mapping.
pub fn category_emoji(key: &str) -> &'static str {
    match key {
        "ai" => "🤖",
        "robotics" => "🦾",
        "space" => "🚀",
        _ => DEFAULT_CATEGORY_EMOJI,
    }
}
