//! Page surface port trait
//!
//! The renderer writes into a fixed set of mount points identified by
//! stable element ids. The sink is expected to provide all of them.

use crate::domain::markup::Node;

/// Stable mount points of the page shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    Tagline,
    StatTotal,
    StatToday,
    StatTime,
    CategoryGrid,
    TrendingGrid,
    LatestList,
    SourceTags,
}

impl MountPoint {
    pub const ALL: [MountPoint; 8] = [
        MountPoint::Tagline,
        MountPoint::StatTotal,
        MountPoint::StatToday,
        MountPoint::StatTime,
        MountPoint::CategoryGrid,
        MountPoint::TrendingGrid,
        MountPoint::LatestList,
        MountPoint::SourceTags,
    ];

    /// Element id in the page shell
    pub fn id(&self) -> &'static str {
        match self {
            MountPoint::Tagline => "tagline",
            MountPoint::StatTotal => "stat-total",
            MountPoint::StatToday => "stat-today",
            MountPoint::StatTime => "stat-time",
            MountPoint::CategoryGrid => "cat-grid",
            MountPoint::TrendingGrid => "trending-grid",
            MountPoint::LatestList => "latest-list",
            MountPoint::SourceTags => "source-tags",
        }
    }
}

impl std::fmt::Display for MountPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.id())
    }
}

/// Rendering surface the renderer populates
pub trait PageSink {
    /// Replace the content of a mount point with plain text
    fn set_text(&mut self, mount: MountPoint, text: String);

    /// Replace the content of a mount point with structured nodes
    fn set_children(&mut self, mount: MountPoint, children: Vec<Node>);

    /// Replace the whole page body, discarding every mount point
    fn replace_body(&mut self, body: Node);
}
