//! News item domain entity
//!
//! One aggregated entry in the trending or latest lists.

use serde::Deserialize;

use super::category::category_emoji;
use super::deserialize_null_default;

/// Upper bound on rendered stars, so a corrupt score stays readable
pub const MAX_STARS: usize = 10;

/// A single aggregated news item
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub source: String,
    /// Category key (e.g. "ai"), not the display name
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub category: String,
    /// Publish time as an ISO-8601 string
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub importance: Option<f64>,
}

impl NewsItem {
    /// Badge emoji for this item's category
    pub fn emoji(&self) -> &'static str {
        category_emoji(&self.category)
    }

    /// Number of stars for the importance score: `floor(importance or 0)`
    pub fn star_count(&self) -> usize {
        match self.importance {
            Some(score) if score.is_finite() && score >= 1.0 => {
                (score.floor() as usize).min(MAX_STARS)
            }
            _ => 0,
        }
    }

    /// Star rating string, e.g. "⭐⭐⭐"
    pub fn stars(&self) -> String {
        "⭐".repeat(self.star_count())
    }
}
