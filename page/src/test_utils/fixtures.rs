//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Duration, Offset, TimeZone, Utc};

use crate::domain::entities::{NewsItem, SiteData};
use crate::view::{NumberLocale, RenderContext};

/// A complete site data document; `updated_at` is five minutes before `fixed_now()`
const SITE_DATA_JSON: &str = r#"{
    "site": {"tagline": "Tech pulse", "tagline_cn": "科技脉搏"},
    "updated_at": "2026-03-10T11:55:00Z",
    "stats": {
        "total_items": 1234,
        "today_items": 56,
        "sources": {"A": 5, "B": 9, "C": 2}
    },
    "categories": {
        "ai": {"name": "AI", "name_cn": "人工智能", "emoji": "🤖", "count": 42},
        "robotics": {"name": "Robotics", "name_cn": "机器人", "emoji": "🦾", "count": 17},
        "space": {"name": "Space", "name_cn": "航天", "emoji": "🚀", "count": 8}
    },
    "trending": [
        {"title": "New model released", "link": "https://example.org/model", "source": "A",
         "category": "ai", "time": "2026-03-10T09:00:00Z", "importance": 4.5},
        {"title": "Booster caught", "link": "https://example.org/booster", "source": "B",
         "category": "space", "time": "2026-03-09T12:00:00Z"}
    ],
    "latest": [
        {"title": "Humanoid walks", "link": "https://example.org/walk", "source": "C",
         "category": "robotics", "time": "2026-03-10T11:59:30Z", "importance": 2},
        {"title": "Lab notes", "link": "https://example.org/lab", "source": "B",
         "category": "biology", "time": "2026-03-10T10:00:00Z", "importance": 0},
        {"title": "Orbit update", "link": "https://example.org/orbit", "source": "A",
         "category": "space", "time": "2026-03-07T12:00:00Z"}
    ]
}"#;

pub fn site_data_json() -> &'static str {
    SITE_DATA_JSON
}

/// Parsed form of `site_data_json()`
pub fn test_site_data() -> SiteData {
    SiteData::from_json(SITE_DATA_JSON).expect("fixture must parse")
}

/// The "current time" used by every time-dependent test
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

pub fn test_context() -> RenderContext {
    RenderContext {
        now: fixed_now(),
        locale: NumberLocale::En,
        naive_offset: Utc.fix(),
    }
}

/// Create a news item published one hour before `fixed_now()`
pub fn test_item(title: &str, category: &str) -> NewsItem {
    test_item_at(title, category, fixed_now() - Duration::hours(1))
}

pub fn test_item_at(title: &str, category: &str, at: DateTime<Utc>) -> NewsItem {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    NewsItem {
        title: title.to_string(),
        link: format!("https://example.org/{}", slug),
        source: "Example Wire".to_string(),
        category: category.to_string(),
        time: Some(at.to_rfc3339()),
        importance: Some(2.0),
    }
}

/// Items titled "Item 1" .. "Item n", in that order
pub fn test_items(n: usize) -> Vec<NewsItem> {
    (1..=n)
        .map(|i| test_item(&format!("Item {}", i), "ai"))
        .collect()
}
