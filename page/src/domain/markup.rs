//! Structured markup
//!
//! View regions are built as element trees rather than strings. Text and
//! attribute values are escaped once, at serialization, and interaction is
//! carried as explicit event bindings instead of inline handlers.

use std::fmt::Write;

/// Elements serialized without children or a closing tag
const VOID_TAGS: [&str; 4] = ["br", "img", "link", "meta"];

/// An action a view element can trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Narrow the page to one category key
    FilterByCategory(String),
}

impl ViewAction {
    pub fn name(&self) -> &'static str {
        match self {
            ViewAction::FilterByCategory(_) => "filter-category",
        }
    }

    pub fn argument(&self) -> &str {
        match self {
            ViewAction::FilterByCategory(key) => key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Click => write!(f, "click"),
        }
    }
}

/// An event wired to an action on a specific element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    pub event: EventKind,
    pub action: ViewAction,
}

/// A node in a view tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated unescaped text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        self.collect_text(&mut buf);
        buf
    }

    fn collect_text(&self, buf: &mut String) {
        match self {
            Node::Text(text) => buf.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(buf);
                }
            }
        }
    }

    /// Serialize to escaped HTML
    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        self.write_html(&mut buf);
        buf
    }

    pub fn write_html(&self, buf: &mut String) {
        match self {
            Node::Text(text) => buf.push_str(&html_escape::encode_safe(text)),
            Node::Element(el) => el.write_html(buf),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An HTML element with attributes, children and event bindings
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    class: Option<String>,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
    bindings: Vec<EventBinding>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            attrs: Vec::new(),
            children: Vec::new(),
            bindings: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on_click(mut self, action: ViewAction) -> Self {
        self.bindings.push(EventBinding {
            event: EventKind::Click,
            action,
        });
        self
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn bindings(&self) -> &[EventBinding] {
        &self.bindings
    }

    /// Depth-first search for descendants carrying a class
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if let Node::Element(el) = child {
                if el.class_name() == Some(class) {
                    found.push(el);
                }
                el.collect_by_class(class, found);
            }
        }
    }

    fn write_html(&self, buf: &mut String) {
        buf.push('<');
        buf.push_str(self.tag);
        if let Some(class) = &self.class {
            write_attr(buf, "class", class);
        }
        for (name, value) in &self.attrs {
            write_attr(buf, name, value);
        }
        for binding in &self.bindings {
            write_attr(buf, "data-event", &binding.event.to_string());
            write_attr(buf, "data-action", binding.action.name());
            write_attr(buf, "data-action-arg", binding.action.argument());
        }
        buf.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(buf);
        }
        let _ = write!(buf, "</{}>", self.tag);
    }
}

fn write_attr(buf: &mut String, name: &str, value: &str) {
    let _ = write!(
        buf,
        " {}=\"{}\"",
        name,
        html_escape::encode_double_quoted_attribute(value)
    );
}
