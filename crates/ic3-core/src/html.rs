//! HTML serialization and fragment parsing
//!
//! Serialization renders an [`Element`] tree to an HTML string with escaped
//! text and attribute values, HTML5 void-element handling, and literal text
//! inside raw-text elements such as `<script>` and `<style>`. Parsing bridges
//! `scraper`'s html5ever DOM into the owned element tree, which is how
//! `text/html` output payloads become insertable nodes.

use crate::dom::{Element, HtmlDocument, Node};
use crate::error::Result;
use scraper::{ElementRef, Html};
use std::path::Path;

/// Tags that never take a closing tag in HTML5
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "param", "source", "track", "wbr",
];

/// Check whether a tag is an HTML5 void element
#[inline]
#[must_use = "returns whether the tag is a void element"]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Tags whose text content HTML parsers never entity-decode
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "plaintext", "script", "style", "xmp",
];

/// Check whether a tag holds raw text (`<script>`, `<style>`, and friends)
#[inline]
#[must_use = "returns whether the tag holds raw text"]
pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

/// Escape text content for HTML output
#[must_use = "returns the escaped text"]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for double-quoted HTML output
#[must_use = "returns the escaped attribute value"]
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Element {
    /// Serialize this subtree to an HTML string
    ///
    /// Attributes are written in sorted name order, so output is
    /// deterministic for a given tree.
    ///
    /// Text inside raw-text elements (`<script>`, `<style>`, ...) is written
    /// literally, since parsers never entity-decode it. Callers putting text
    /// there must keep it free of the element's own closing tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ic3_core::Element;
    ///
    /// let el = Element::new("pre").with_class("plain").with_text("a < b");
    /// assert_eq!(el.to_html(), r#"<pre class="plain">a &lt; b</pre>"#);
    /// ```
    #[must_use = "returns the serialized HTML"]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag());
        for (name, value) in self.attrs() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if is_void_element(self.tag()) {
            return;
        }
        let raw_text = is_raw_text_element(self.tag());
        for child in self.children() {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) if raw_text => out.push_str(text),
                Node::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }
}

impl HtmlDocument {
    /// Serialize the whole document to an HTML string
    #[must_use = "returns the serialized HTML"]
    pub fn to_html(&self) -> String {
        self.root().to_html()
    }
}

/// Parse an HTML fragment into an owned element
///
/// A fragment with exactly one top-level element comes back as that element.
/// Anything else (multiple top-level nodes, bare text, or an empty string) is
/// wrapped in a `<div>` so the caller always gets a single insertable node.
/// Whitespace-only text nodes between elements are dropped.
///
/// # Examples
///
/// ```rust
/// use ic3_core::parse_fragment;
///
/// let el = parse_fragment("<p class=\"msg\">hello <b>world</b></p>");
/// assert_eq!(el.tag(), "p");
/// assert_eq!(el.text(), "hello world");
/// ```
#[must_use = "returns the parsed element"]
pub fn parse_fragment(html: &str) -> Element {
    let fragment = Html::parse_fragment(html);
    let mut top = Vec::new();
    collect_children(fragment.root_element(), &mut top);

    if top.len() == 1 && matches!(top.first(), Some(Node::Element(_))) {
        if let Some(Node::Element(el)) = top.pop() {
            return el;
        }
    }
    let mut wrapper = Element::new("div");
    for node in top {
        wrapper.append_node(node);
    }
    wrapper
}

/// Parse an HTML fragment from a file
///
/// # Errors
/// Returns [`crate::Ic3Error::IoError`] if the file cannot be read.
pub fn parse_fragment_file<P: AsRef<Path>>(path: P) -> Result<Element> {
    let html = std::fs::read_to_string(path.as_ref())?;
    Ok(parse_fragment(&html))
}

fn collect_children(parent: ElementRef<'_>, out: &mut Vec<Node>) {
    for child in parent.children() {
        match child.value() {
            scraper::Node::Element(_) => {
                if let Some(el_ref) = ElementRef::wrap(child) {
                    out.push(Node::Element(convert_element(el_ref)));
                }
            }
            scraper::Node::Text(text) => {
                let content: &str = text;
                if !content.trim().is_empty() {
                    out.push(Node::Text(content.to_string()));
                }
            }
            _ => {}
        }
    }
}

fn convert_element(el_ref: ElementRef<'_>) -> Element {
    let value = el_ref.value();
    let mut element = Element::new(value.name());
    for (name, attr_value) in value.attrs() {
        element.set_attr(name, attr_value);
    }
    let mut children = Vec::new();
    collect_children(el_ref, &mut children);
    for node in children {
        element.append_node(node);
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"say "hi" & go"#), "say &quot;hi&quot; &amp; go");
    }

    #[test]
    fn test_serialize_simple_element() {
        let el = Element::new("div").with_class("output").with_text("hello");
        assert_eq!(el.to_html(), r#"<div class="output">hello</div>"#);
    }

    #[test]
    fn test_serialize_void_element_no_closing_tag() {
        let link = Element::new("link")
            .with_attr("rel", "stylesheet")
            .with_attr("type", "text/css")
            .with_attr("href", "c3.css");

        assert_eq!(
            link.to_html(),
            r#"<link href="c3.css" rel="stylesheet" type="text/css">"#
        );
    }

    #[test]
    fn test_serialize_nested() {
        let mut inner = Element::new("span");
        inner.append_text("x");
        let mut outer = Element::new("div");
        outer.append_child(inner);
        outer.append_text(" & more");

        assert_eq!(outer.to_html(), "<div><span>x</span> &amp; more</div>");
    }

    #[test]
    fn test_serialize_escapes_attr_values() {
        let el = Element::new("div").with_attr("title", r#"<"quoted">"#);
        assert_eq!(el.to_html(), r#"<div title="&lt;&quot;quoted&quot;&gt;"></div>"#);
    }

    #[test]
    fn test_serialize_script_text_stays_literal() {
        let el = Element::new("script")
            .with_attr("type", "application/json")
            .with_text(r#"{"cmp": "a<b && c>d"}"#);
        assert_eq!(
            el.to_html(),
            r#"<script type="application/json">{"cmp": "a<b && c>d"}</script>"#,
            "Parsers never decode entities inside <script>, so none may be written"
        );
    }

    #[test]
    fn test_serialize_style_text_stays_literal() {
        let el = Element::new("style").with_text("div > p { color: red; }");
        assert_eq!(el.to_html(), "<style>div > p { color: red; }</style>");
    }

    #[test]
    fn test_serialize_script_attrs_still_escaped() {
        let el = Element::new("script").with_attr("data-note", "a<b");
        assert_eq!(el.to_html(), r#"<script data-note="a&lt;b"></script>"#);
    }

    #[test]
    fn test_document_to_html() {
        let doc = HtmlDocument::new();
        assert_eq!(doc.to_html(), "<html><head></head><body></body></html>");
    }

    #[test]
    fn test_parse_single_element_unwrapped() {
        let el = parse_fragment("<p>text</p>");
        assert_eq!(el.tag(), "p");
        assert_eq!(el.text(), "text");
    }

    #[test]
    fn test_parse_multiple_top_level_wrapped_in_div() {
        let el = parse_fragment("<b>one</b><i>two</i>");
        assert_eq!(el.tag(), "div");
        let tags: Vec<&str> = el.child_elements().map(Element::tag).collect();
        assert_eq!(tags, vec!["b", "i"]);
        assert_eq!(el.text(), "onetwo");
    }

    #[test]
    fn test_parse_bare_text_wrapped_in_div() {
        let el = parse_fragment("just text");
        assert_eq!(el.tag(), "div");
        assert_eq!(el.text(), "just text");
    }

    #[test]
    fn test_parse_empty_fragment() {
        let el = parse_fragment("");
        assert_eq!(el.tag(), "div");
        assert!(el.is_empty());
    }

    #[test]
    fn test_parse_preserves_attributes() {
        let el = parse_fragment(r#"<table class="dataframe" border="1"></table>"#);
        assert_eq!(el.tag(), "table");
        assert_eq!(el.attr("class"), Some("dataframe"));
        assert_eq!(el.attr("border"), Some("1"));
    }

    #[test]
    fn test_parse_nested_structure() {
        let el = parse_fragment("<ul><li>a</li><li>b</li></ul>");
        assert_eq!(el.tag(), "ul");
        assert_eq!(el.element_count(), 3);
        assert_eq!(el.text(), "ab");
    }

    #[test]
    fn test_parse_skips_whitespace_only_text() {
        let el = parse_fragment("<div>  <p>x</p>  </div>");
        assert_eq!(el.tag(), "div");
        assert_eq!(el.children().len(), 1, "whitespace-only text nodes dropped");
    }

    #[test]
    fn test_parse_then_serialize() {
        let el = parse_fragment(r#"<p class="msg">hi</p>"#);
        assert_eq!(el.to_html(), r#"<p class="msg">hi</p>"#);
    }

    #[test]
    fn test_parse_fragment_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "<article><h1>Title</h1></article>").expect("write temp file");

        let el = parse_fragment_file(file.path()).expect("parse fragment file");
        assert_eq!(el.tag(), "article");
        assert_eq!(el.text(), "Title");
    }

    #[test]
    fn test_parse_fragment_file_missing() {
        let result = parse_fragment_file("/nonexistent/fragment.html");
        match result {
            Err(crate::Ic3Error::IoError(_)) => {}
            other => panic!("Expected IoError, got {other:?}"),
        }
    }
}
