//! HTML document sink
//!
//! An in-memory page shell exposing every mount point. Regions written
//! through `PageSink` replace the shell's loading placeholders, and
//! `to_html` serializes the complete static page.

use std::collections::HashMap;

use crate::domain::ports::{MountPoint, PageSink};
use crate::view::{Element, Node};

const STYLESHEET: &str = "assets/style.css";

pub struct HtmlDocument {
    title: String,
    regions: HashMap<MountPoint, Vec<Node>>,
    replaced_body: Option<Node>,
}

impl HtmlDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            regions: HashMap::new(),
            replaced_body: None,
        }
    }

    /// Current content of a mount point, `None` while still showing its placeholder
    pub fn region(&self, mount: MountPoint) -> Option<&[Node]> {
        self.regions.get(&mount).map(Vec::as_slice)
    }

    pub fn region_text(&self, mount: MountPoint) -> Option<String> {
        self.region(mount)
            .map(|nodes| nodes.iter().map(Node::text_content).collect())
    }

    /// True once the body was swapped out (error view)
    pub fn is_body_replaced(&self) -> bool {
        self.replaced_body.is_some()
    }

    pub fn to_html(&self) -> String {
        let body = match &self.replaced_body {
            Some(body) => Element::new("body").child(body.clone()),
            None => self.shell(),
        };

        let mut buf = String::from("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
        buf.push_str("<meta charset=\"UTF-8\">\n");
        buf.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        buf.push_str(&Node::from(Element::new("title").text(&self.title)).to_html());
        buf.push('\n');
        buf.push_str(
            &Node::from(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", STYLESHEET),
            )
            .to_html(),
        );
        buf.push_str("\n</head>\n");
        Node::from(body).write_html(&mut buf);
        buf.push_str("\n</html>\n");
        buf
    }

    fn shell(&self) -> Element {
        let header = Element::new("header")
            .class("header")
            .child(Element::new("h1").text("📡 StellarPulse"))
            .child(self.mount("p", MountPoint::Tagline, "tagline"))
            .child(
                Element::new("div")
                    .class("stats")
                    .child(stat(self.mount("span", MountPoint::StatTotal, "value"), "Total"))
                    .child(stat(self.mount("span", MountPoint::StatToday, "value"), "Today"))
                    .child(stat(self.mount("span", MountPoint::StatTime, "value"), "Updated")),
            );

        let main = Element::new("main")
            .class("container")
            .child(section(
                "Categories",
                self.mount("div", MountPoint::CategoryGrid, "cat-grid"),
            ))
            .child(section(
                "Trending",
                self.mount("div", MountPoint::TrendingGrid, "trending-grid"),
            ))
            .child(section(
                "Latest",
                self.mount("div", MountPoint::LatestList, "latest-list"),
            ))
            .child(section(
                "Sources",
                self.mount("div", MountPoint::SourceTags, "source-tags"),
            ));

        Element::new("body").child(header).child(main)
    }

    fn mount(&self, tag: &'static str, mount: MountPoint, class: &str) -> Element {
        let el = Element::new(tag).class(class).attr("id", mount.id());
        match self.regions.get(&mount) {
            Some(children) => children.iter().cloned().fold(el, |el, child| el.child(child)),
            None => el.child(Element::new("div").class("loading").text("Loading...")),
        }
    }
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new("StellarPulse - Tech Intelligence")
    }
}

impl PageSink for HtmlDocument {
    fn set_text(&mut self, mount: MountPoint, text: String) {
        self.regions.insert(mount, vec![Node::Text(text)]);
    }

    fn set_children(&mut self, mount: MountPoint, children: Vec<Node>) {
        self.regions.insert(mount, children);
    }

    fn replace_body(&mut self, body: Node) {
        self.regions.clear();
        self.replaced_body = Some(body);
    }
}

fn stat(value: Element, label: &str) -> Element {
    Element::new("div")
        .class("stat")
        .child(value)
        .child(Element::new("span").class("label").text(label))
}

fn section(title: &str, content: Element) -> Element {
    Element::new("section")
        .class("section")
        .child(Element::new("h2").text(title))
        .child(content)
}
