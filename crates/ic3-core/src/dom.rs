//! DOM element tree for notebook output containers
//!
//! An owned tree of elements and text nodes. Every element is assigned a
//! process-unique [`NodeId`] at creation, so host bookkeeping can keep a
//! handle to a node after ownership of the node moves into a parent tree.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique handle to an element in a DOM tree
///
/// Ids are allocated from a process-wide atomic counter and are never reused,
/// so a stale handle fails lookup instead of aliasing a newer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for NodeId {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the element tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Child element
    Element(Element),
    /// Text content
    Text(String),
}

/// An HTML element with attributes and children
///
/// # Examples
///
/// ```rust
/// use ic3_core::Element;
///
/// let mut container = Element::new("div").with_class("output");
/// let child = Element::new("pre").with_text("hello");
/// let child_id = container.append_child(child);
///
/// assert!(container.contains(child_id));
/// assert_eq!(container.text(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: NodeId,
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with a fresh id
    #[must_use = "creates an element with the given tag"]
    pub fn new(tag: &str) -> Self {
        Self {
            id: NodeId::next(),
            tag: tag.to_lowercase(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Handle assigned to this element at creation
    #[inline]
    #[must_use = "returns the element id"]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Lowercased tag name
    #[inline]
    #[must_use = "returns the tag name"]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value, if set
    #[inline]
    #[must_use = "returns the attribute value"]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes in sorted name order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Builder form of [`set_attr`](Self::set_attr)
    #[inline]
    #[must_use = "returns the element with the attribute set"]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form of [`add_class`](Self::add_class)
    #[inline]
    #[must_use = "returns the element with the classes added"]
    pub fn with_class(mut self, classes: &str) -> Self {
        self.add_class(classes);
        self
    }

    /// Builder form of [`append_text`](Self::append_text)
    #[inline]
    #[must_use = "returns the element with the text appended"]
    pub fn with_text(mut self, text: &str) -> Self {
        self.append_text(text);
        self
    }

    /// Add one or more whitespace-separated CSS classes, skipping duplicates
    pub fn add_class(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if self.has_class(class) {
                continue;
            }
            match self.attributes.get_mut("class") {
                Some(existing) => {
                    existing.push(' ');
                    existing.push_str(class);
                }
                None => {
                    self.attributes.insert("class".to_string(), class.to_string());
                }
            }
        }
    }

    /// Check membership in the whitespace-separated class list
    #[must_use = "returns whether the class is present"]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map_or(false, |list| list.split_whitespace().any(|c| c == class))
    }

    /// Append a child element, returning its handle
    ///
    /// Ownership of the child moves into this element; the returned id is the
    /// caller's way of referring to it afterwards.
    pub fn append_child(&mut self, child: Element) -> NodeId {
        let id = child.id;
        self.children.push(Node::Element(child));
        id
    }

    /// Append a text node
    pub fn append_text(&mut self, text: &str) {
        self.children.push(Node::Text(text.to_string()));
    }

    /// Append an already-built node, element or text
    pub fn append_node(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Child nodes in document order
    #[inline]
    #[must_use = "returns the child nodes"]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Whether this element has no children at all
    #[inline]
    #[must_use = "returns whether the element is empty"]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Find an element by id in this subtree, including self
    #[must_use = "returns the element with the given id"]
    pub fn find(&self, id: NodeId) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        for child in &self.children {
            if let Node::Element(el) = child {
                if let Some(found) = el.find(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Mutable variant of [`find`](Self::find)
    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child {
                if let Some(found) = el.find_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Check whether an element with the given id is in this subtree
    #[inline]
    #[must_use = "returns whether the id is in this subtree"]
    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Number of elements in this subtree, including self
    #[must_use = "returns the element count"]
    pub fn element_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|node| match node {
                Node::Element(el) => el.element_count(),
                Node::Text(_) => 0,
            })
            .sum::<usize>()
    }

    /// Concatenated text content of this subtree, in document order
    #[must_use = "returns the concatenated text"]
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }
}

/// A minimal hosting document: `<html>` with optional `<head>` and a `<body>`
///
/// Stylesheet loading targets the head; cell output rendering targets
/// containers that live under the body. Degenerate documents without a head
/// are representable because hosts embed output areas in surprising places.
///
/// # Examples
///
/// ```rust
/// use ic3_core::HtmlDocument;
///
/// let doc = HtmlDocument::new();
/// assert!(doc.head().is_some());
/// assert!(doc.body().is_some());
///
/// let headless = HtmlDocument::without_head();
/// assert!(headless.head().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlDocument {
    root: Element,
}

impl HtmlDocument {
    /// Create a document with empty `<head>` and `<body>`
    #[must_use = "creates a document with head and body"]
    pub fn new() -> Self {
        let mut root = Element::new("html");
        root.append_child(Element::new("head"));
        root.append_child(Element::new("body"));
        Self { root }
    }

    /// Create a degenerate document with a `<body>` but no `<head>`
    #[must_use = "creates a document without a head"]
    pub fn without_head() -> Self {
        let mut root = Element::new("html");
        root.append_child(Element::new("body"));
        Self { root }
    }

    /// The `<html>` root element
    #[inline]
    #[must_use = "returns the root element"]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the `<html>` root element
    #[inline]
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// The `<head>` element, if the document has one
    #[must_use = "returns the head element"]
    pub fn head(&self) -> Option<&Element> {
        self.root.child_elements().find(|el| el.tag == "head")
    }

    /// Mutable access to the `<head>` element, if the document has one
    pub fn head_mut(&mut self) -> Option<&mut Element> {
        Self::child_mut(&mut self.root, "head")
    }

    /// The `<body>` element, if the document has one
    #[must_use = "returns the body element"]
    pub fn body(&self) -> Option<&Element> {
        self.root.child_elements().find(|el| el.tag == "body")
    }

    /// Mutable access to the `<body>` element, if the document has one
    pub fn body_mut(&mut self) -> Option<&mut Element> {
        Self::child_mut(&mut self.root, "body")
    }

    fn child_mut<'a>(root: &'a mut Element, tag: &str) -> Option<&'a mut Element> {
        root.children.iter_mut().find_map(|node| match node {
            Node::Element(el) if el.tag == tag => Some(el),
            _ => None,
        })
    }
}

impl Default for HtmlDocument {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
