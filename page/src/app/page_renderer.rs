//! Page renderer
//!
//! Loads the site data once and projects it into the page's five regions.
//! The renderer moves from `Loading` to either `Rendered` or `Errored` and
//! never leaves those states: there is no retry and no partial render.

use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};

use crate::domain::entities::SiteData;
use crate::domain::ports::{Clock, MountPoint, PageSink, SiteDataSource};
use crate::error::LoadError;
use crate::view::renderer::{
    category_tiles, error_view, header_view, latest_rows, source_tags, trending_cards,
};
use crate::view::{NumberLocale, RenderContext, ViewAction};

/// Lifecycle of a page
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Rendered(Arc<SiteData>),
    Errored,
}

impl PageState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PageState::Loading)
    }
}

/// Presentation settings that do not come from the data document
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub locale: NumberLocale,
    /// Offset for timestamps written without one
    pub naive_offset: FixedOffset,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            naive_offset: Utc.fix(),
        }
    }
}

pub struct PageRenderer<S, C>
where
    S: SiteDataSource,
    C: Clock,
{
    source: Arc<S>,
    clock: Arc<C>,
    options: RenderOptions,
    state: PageState,
}

impl<S, C> PageRenderer<S, C>
where
    S: SiteDataSource,
    C: Clock,
{
    pub fn new(source: Arc<S>, clock: Arc<C>, options: RenderOptions) -> Self {
        Self {
            source,
            clock,
            options,
            state: PageState::Loading,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Load the data and render it, or show the error view.
    ///
    /// Load failures are logged and end in `PageState::Errored`; they never
    /// propagate to the caller. Calling again after a terminal state is a no-op.
    pub async fn init<P: PageSink>(&mut self, sink: &mut P) -> &PageState {
        if self.state.is_terminal() {
            tracing::debug!("Page already initialized, ignoring");
            return &self.state;
        }

        match self.load().await {
            Ok(data) => {
                let data = Arc::new(data);
                self.render(&data, sink);
                self.state = PageState::Rendered(data);
            }
            Err(e) => {
                tracing::error!("Failed to load data: {}", e);
                self.show_error(sink);
                self.state = PageState::Errored;
            }
        }

        &self.state
    }

    /// One fetch, one parse
    pub async fn load(&self) -> Result<SiteData, LoadError> {
        tracing::info!("Loading site data from {}", self.source.describe());

        let body = self.source.fetch().await?;
        let data = SiteData::from_json(&body)?;

        tracing::debug!(
            categories = data.categories.len(),
            trending = data.trending.len(),
            latest = data.latest.len(),
            sources = data.stats.sources.len(),
            "Site data loaded"
        );
        Ok(data)
    }

    /// Handle an action raised by a view binding.
    ///
    /// Category filtering is not implemented; the selection is only logged.
    pub fn dispatch(&self, action: &ViewAction) {
        match action {
            ViewAction::FilterByCategory(key) => {
                tracing::debug!("Filter by: {}", key);
            }
        }
    }

    fn render<P: PageSink>(&self, data: &SiteData, sink: &mut P) {
        let ctx = RenderContext {
            now: self.clock.now(),
            locale: self.options.locale,
            naive_offset: self.options.naive_offset,
        };

        let header = header_view(data, &ctx);
        sink.set_text(MountPoint::Tagline, header.tagline);
        sink.set_text(MountPoint::StatTotal, header.total);
        sink.set_text(MountPoint::StatToday, header.today);
        sink.set_text(MountPoint::StatTime, header.updated);

        sink.set_children(MountPoint::CategoryGrid, category_tiles(&data.categories));
        sink.set_children(MountPoint::TrendingGrid, trending_cards(&data.trending));
        sink.set_children(MountPoint::LatestList, latest_rows(&data.latest, &ctx));
        sink.set_children(MountPoint::SourceTags, source_tags(&data.stats.sources));

        tracing::info!("Page rendered");
    }

    fn show_error<P: PageSink>(&self, sink: &mut P) {
        sink.replace_body(error_view());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HtmlDocument;
    use crate::error::FetchError;
    use crate::test_utils::{
        fixed_now, site_data_json, FixedClock, MockSiteDataSource, RecordingSink, SinkCall,
    };
    use crate::view::Node;

    fn create_renderer(
        source: MockSiteDataSource,
    ) -> PageRenderer<MockSiteDataSource, FixedClock> {
        PageRenderer::new(
            Arc::new(source),
            Arc::new(FixedClock::new(fixed_now())),
            RenderOptions::default(),
        )
    }

    #[tokio::test]
    async fn init_renders_all_regions() {
        let mut renderer = create_renderer(MockSiteDataSource::with_body(site_data_json()));
        let mut doc = HtmlDocument::default();

        let state = renderer.init(&mut doc).await;

        assert!(matches!(state, PageState::Rendered(_)));
        for mount in MountPoint::ALL {
            assert!(doc.region(mount).is_some(), "{} not rendered", mount);
        }
        assert_eq!(
            doc.region_text(MountPoint::Tagline).as_deref(),
            Some("Tech pulse | 科技脉搏")
        );
        assert_eq!(doc.region_text(MountPoint::StatTotal).as_deref(), Some("1,234"));
        assert_eq!(doc.region_text(MountPoint::StatToday).as_deref(), Some("56"));
        assert_eq!(doc.region_text(MountPoint::StatTime).as_deref(), Some("5m ago"));
        assert!(!doc.is_body_replaced());
    }

    #[tokio::test]
    async fn rendered_state_holds_loaded_data() {
        let mut renderer = create_renderer(MockSiteDataSource::with_body(site_data_json()));
        let mut sink = RecordingSink::default();

        renderer.init(&mut sink).await;

        match renderer.state() {
            PageState::Rendered(data) => {
                assert_eq!(data.trending.len(), 2);
                assert_eq!(data.latest.len(), 3);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test]
    async fn sink_receives_header_text_then_regions() {
        let mut renderer = create_renderer(MockSiteDataSource::with_body(site_data_json()));
        let mut sink = RecordingSink::default();

        renderer.init(&mut sink).await;

        let mounts: Vec<MountPoint> = sink.calls.iter().filter_map(SinkCall::mount).collect();
        assert_eq!(mounts, MountPoint::ALL.to_vec());
    }

    #[tokio::test]
    async fn source_tags_sorted_in_rendered_page() {
        let mut renderer = create_renderer(MockSiteDataSource::with_body(site_data_json()));
        let mut doc = HtmlDocument::default();

        renderer.init(&mut doc).await;

        let tags: Vec<String> = doc
            .region(MountPoint::SourceTags)
            .unwrap()
            .iter()
            .map(Node::text_content)
            .collect();
        assert_eq!(tags, vec!["B9", "A5", "C2"]);
    }

    #[tokio::test]
    async fn null_item_fields_still_render() {
        let body = r#"{
            "site": {"tagline": "t", "tagline_cn": null},
            "stats": {"total_items": 3, "today_items": 1},
            "categories": {},
            "trending": [
                {"title": null, "link": "https://example.org/x", "source": null,
                 "category": null, "time": "2026-03-10T11:00:00Z", "importance": 3}
            ],
            "latest": [
                {"title": "Still here", "link": null, "source": null, "category": "ai",
                 "time": null}
            ]
        }"#;
        let mut renderer = create_renderer(MockSiteDataSource::with_body(body));
        let mut doc = HtmlDocument::default();

        let state = renderer.init(&mut doc).await;

        assert!(matches!(state, PageState::Rendered(_)));
        assert!(!doc.is_body_replaced());
        assert_eq!(doc.region(MountPoint::TrendingGrid).unwrap().len(), 1);
        assert!(doc
            .region_text(MountPoint::TrendingGrid)
            .unwrap()
            .contains("⭐⭐⭐"));
        assert!(doc
            .region_text(MountPoint::LatestList)
            .unwrap()
            .contains("Still here"));
    }

    #[tokio::test]
    async fn empty_lists_render_placeholders() {
        let body = r#"{
            "site": {"tagline": "t", "tagline_cn": "c"},
            "stats": {"total_items": 0, "today_items": 0},
            "categories": {},
            "trending": [],
            "latest": []
        }"#;
        let mut renderer = create_renderer(MockSiteDataSource::with_body(body));
        let mut doc = HtmlDocument::default();

        renderer.init(&mut doc).await;

        assert_eq!(doc.region(MountPoint::TrendingGrid).unwrap().len(), 1);
        assert_eq!(
            doc.region_text(MountPoint::TrendingGrid).as_deref(),
            Some("No trending items yet")
        );
        assert_eq!(doc.region(MountPoint::LatestList).unwrap().len(), 1);
        assert_eq!(
            doc.region_text(MountPoint::LatestList).as_deref(),
            Some("No items yet")
        );
        assert!(doc.region(MountPoint::CategoryGrid).unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_shows_error_view() {
        let source = MockSiteDataSource::failing(FetchError::Status {
            status: 503,
            url: "https://example.org/data/site_data.json".to_string(),
        });
        let mut renderer = create_renderer(source);
        let mut doc = HtmlDocument::default();

        let state = renderer.init(&mut doc).await;

        assert_eq!(*state, PageState::Errored);
        assert!(doc.is_body_replaced());
        let html = doc.to_html();
        assert!(html.contains("Failed to load data"));
        assert!(html.contains("Please try again later"));
        assert!(!html.contains("id=\"trending-grid\""));
    }

    #[tokio::test]
    async fn parse_failure_shows_error_view() {
        let mut renderer = create_renderer(MockSiteDataSource::with_body("<html>oops</html>"));
        let mut sink = RecordingSink::default();

        let state = renderer.init(&mut sink).await;

        assert_eq!(*state, PageState::Errored);
        assert_eq!(sink.calls.len(), 1);
        assert!(matches!(sink.calls[0], SinkCall::ReplaceBody(_)));
    }

    #[tokio::test]
    async fn missing_required_section_is_a_parse_failure() {
        let mut renderer = create_renderer(MockSiteDataSource::with_body(r#"{"site": {}}"#));

        let err = renderer.load().await.unwrap_err();

        assert!(matches!(err, LoadError::Parse(_)));
        let mut doc = HtmlDocument::default();
        assert_eq!(*renderer.init(&mut doc).await, PageState::Errored);
    }

    #[tokio::test]
    async fn fetches_exactly_once() {
        let source = Arc::new(MockSiteDataSource::with_body(site_data_json()));
        let mut renderer = PageRenderer::new(
            source.clone(),
            Arc::new(FixedClock::new(fixed_now())),
            RenderOptions::default(),
        );
        let mut doc = HtmlDocument::default();

        renderer.init(&mut doc).await;
        renderer.init(&mut doc).await;

        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn errored_state_is_terminal() {
        let source = Arc::new(MockSiteDataSource::with_body("not json"));
        let mut renderer = PageRenderer::new(
            source.clone(),
            Arc::new(FixedClock::new(fixed_now())),
            RenderOptions::default(),
        );
        let mut sink = RecordingSink::default();

        renderer.init(&mut sink).await;
        let state = renderer.init(&mut sink).await.clone();

        assert_eq!(state, PageState::Errored);
        assert_eq!(source.fetch_count(), 1);
        assert_eq!(sink.calls.len(), 1);
    }

    #[tokio::test]
    async fn locale_option_changes_grouping() {
        let mut renderer = PageRenderer::new(
            Arc::new(MockSiteDataSource::with_body(site_data_json())),
            Arc::new(FixedClock::new(fixed_now())),
            RenderOptions {
                locale: NumberLocale::De,
                ..RenderOptions::default()
            },
        );
        let mut doc = HtmlDocument::default();

        renderer.init(&mut doc).await;

        assert_eq!(doc.region_text(MountPoint::StatTotal).as_deref(), Some("1.234"));
    }

    #[test]
    fn dispatch_category_filter_is_a_noop() {
        let renderer = create_renderer(MockSiteDataSource::with_body(site_data_json()));

        renderer.dispatch(&ViewAction::FilterByCategory("ai".to_string()));

        assert_eq!(*renderer.state(), PageState::Loading);
    }
}
