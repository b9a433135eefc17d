//! Region renderer
//!
//! Projects slices of the site data into view trees, one builder per page
//! region. Builders are pure: each reads only its own slice and the
//! render context.

use chrono::{DateTime, FixedOffset, Utc};

use super::format::{format_time, group_thousands, safe_link, NumberLocale};
use crate::domain::markup::{Element, Node, ViewAction};
use crate::domain::entities::{Category, NewsItem, SiteData};

/// Number of trending cards shown
pub const TRENDING_LIMIT: usize = 6;
/// Number of latest rows shown
pub const LATEST_LIMIT: usize = 10;

pub const NO_TRENDING_MESSAGE: &str = "No trending items yet";
pub const NO_LATEST_MESSAGE: &str = "No items yet";

/// Inputs shared by the region builders besides the data itself
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
    pub locale: NumberLocale,
    /// Offset applied to timestamps that carry none
    pub naive_offset: FixedOffset,
}

/// Text for the header mount points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub tagline: String,
    pub total: String,
    pub today: String,
    pub updated: String,
}

pub fn header_view(data: &SiteData, ctx: &RenderContext) -> HeaderView {
    HeaderView {
        tagline: format!("{} | {}", data.site.tagline, data.site.tagline_cn),
        total: group_thousands(data.stats.total_items, ctx.locale),
        today: data.stats.today_items.to_string(),
        updated: format_time(data.updated_at.as_deref(), ctx.now, ctx.naive_offset),
    }
}

/// One tile per category, in document order
pub fn category_tiles(categories: &[(String, Category)]) -> Vec<Node> {
    categories
        .iter()
        .map(|(key, cat)| {
            Element::new("div")
                .class("cat-card")
                .on_click(ViewAction::FilterByCategory(key.clone()))
                .child(Element::new("div").class("emoji").text(&cat.emoji))
                .child(Element::new("h3").text(&cat.name))
                .child(Element::new("div").class("name-cn").text(&cat.name_cn))
                .child(Element::new("div").class("count").text(cat.count.to_string()))
                .into()
        })
        .collect()
}

pub fn trending_cards(items: &[NewsItem]) -> Vec<Node> {
    if items.is_empty() {
        return vec![placeholder(NO_TRENDING_MESSAGE)];
    }

    items
        .iter()
        .take(TRENDING_LIMIT)
        .map(|item| {
            Element::new("div")
                .class("news-card")
                .child(
                    Element::new("div")
                        .class("category")
                        .text(format!("{} {}", item.emoji(), item.category)),
                )
                .child(Element::new("h4").child(external_link(item)))
                .child(
                    Element::new("div")
                        .class("meta")
                        .child(Element::new("span").text(&item.source))
                        .child(Element::new("span").class("importance").text(item.stars())),
                )
                .into()
        })
        .collect()
}

pub fn latest_rows(items: &[NewsItem], ctx: &RenderContext) -> Vec<Node> {
    if items.is_empty() {
        return vec![placeholder(NO_LATEST_MESSAGE)];
    }

    items
        .iter()
        .take(LATEST_LIMIT)
        .enumerate()
        .map(|(idx, item)| {
            let age = format_time(item.time.as_deref(), ctx.now, ctx.naive_offset);
            Element::new("div")
                .class("news-item")
                .child(Element::new("span").class("num").text((idx + 1).to_string()))
                .child(
                    Element::new("div")
                        .class("content")
                        .child(Element::new("h4").child(external_link(item)))
                        .child(
                            Element::new("div")
                                .class("meta")
                                .text(format!("{} · {}", item.source, age)),
                        ),
                )
                .child(Element::new("span").class("category-badge").text(item.emoji()))
                .into()
        })
        .collect()
}

/// Source tags by count, highest first. Equal counts keep document order.
pub fn source_tags(sources: &[(String, u64)]) -> Vec<Node> {
    let mut sorted: Vec<&(String, u64)> = sources.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    sorted
        .into_iter()
        .map(|(name, count)| {
            Element::new("span")
                .class("source-tag")
                .text(name)
                .child(Element::new("span").class("count").text(count.to_string()))
                .into()
        })
        .collect()
}

/// Full-page failure message
pub fn error_view() -> Node {
    Element::new("div")
        .class("load-error")
        .attr(
            "style",
            "text-align: center; padding: 100px 20px; color: #94a3b8;",
        )
        .child(Element::new("h2").text("Failed to load data"))
        .child(Element::new("p").text("Please try again later"))
        .into()
}

fn placeholder(message: &str) -> Node {
    Element::new("div").class("loading").text(message).into()
}

fn external_link(item: &NewsItem) -> Element {
    Element::new("a")
        .attr("href", safe_link(&item.link))
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .text(&item.title)
}
