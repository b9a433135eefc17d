//! Site data domain entity
//!
//! The root document fetched once at startup. Mappings keep the key order
//! of the JSON document, which drives tile order and source-tag ties.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::category::Category;
use super::deserialize_null_default;
use super::news_item::NewsItem;

/// Helper to deserialize a JSON object into `(key, value)` pairs in document order.
/// `null` yields an empty list; a repeated key keeps its first position and the last value.
fn deserialize_ordered_map<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct OrderedMapVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let capacity = map.size_hint().unwrap_or(0);
            let mut entries: Vec<(String, V)> = Vec::with_capacity(capacity);
            let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                match positions.get(&key) {
                    Some(&idx) => entries[idx].1 = value,
                    None => {
                        positions.insert(key.clone(), entries.len());
                        entries.push((key, value));
                    }
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
}

/// Site identity block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteInfo {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tagline: String,
    /// Localized (Chinese) tagline
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tagline_cn: String,
}

/// Aggregate counters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_items: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub today_items: u64,
    /// Source name -> item count, in document order
    #[serde(default, deserialize_with = "deserialize_ordered_map")]
    pub sources: Vec<(String, u64)>,
}

/// The site data document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteData {
    pub site: SiteInfo,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub stats: Stats,
    /// Category key -> category, in document order
    #[serde(deserialize_with = "deserialize_ordered_map")]
    pub categories: Vec<(String, Category)>,
    /// Importance-ranked items, as ordered by the producer
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub trending: Vec<NewsItem>,
    /// Recency-ranked items, as ordered by the producer
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub latest: Vec<NewsItem>,
}

impl SiteData {
    /// Parse a site data document from its JSON body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
