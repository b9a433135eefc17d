//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and
//! record how they were used.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::ports::{Clock, MountPoint, PageSink, SiteDataSource};
use crate::error::FetchError;
use crate::view::Node;

// ============================================================================
// Mock Site Data Source
// ============================================================================

enum MockResponse {
    Body(String),
    Failure(Mutex<Option<FetchError>>),
}

pub struct MockSiteDataSource {
    response: MockResponse,
    fetches: AtomicUsize,
}

impl MockSiteDataSource {
    /// Every fetch returns this body
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Body(body.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// The first fetch fails with this error
    pub fn failing(error: FetchError) -> Self {
        Self {
            response: MockResponse::Failure(Mutex::new(Some(error))),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SiteDataSource for MockSiteDataSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockResponse::Body(body) => Ok(body.clone()),
            MockResponse::Failure(error) => Err(error
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| FetchError::InvalidUrl("mock already failed".to_string()))),
        }
    }

    fn describe(&self) -> String {
        "mock://site_data.json".to_string()
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Text(MountPoint, String),
    Children(MountPoint, Vec<Node>),
    ReplaceBody(Node),
}

impl SinkCall {
    pub fn mount(&self) -> Option<MountPoint> {
        match self {
            SinkCall::Text(mount, _) | SinkCall::Children(mount, _) => Some(*mount),
            SinkCall::ReplaceBody(_) => None,
        }
    }
}

/// Page sink that records every call in order
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl PageSink for RecordingSink {
    fn set_text(&mut self, mount: MountPoint, text: String) {
        self.calls.push(SinkCall::Text(mount, text));
    }

    fn set_children(&mut self, mount: MountPoint, children: Vec<Node>) {
        self.calls.push(SinkCall::Children(mount, children));
    }

    fn replace_body(&mut self, body: Node) {
        self.calls.push(SinkCall::ReplaceBody(body));
    }
}
