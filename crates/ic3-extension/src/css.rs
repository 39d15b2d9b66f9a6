//! One-time stylesheet injection for chart output

use ic3_core::{Element, HtmlDocument};
use log::debug;

/// Href carried by the injected stylesheet link.
pub const STYLESHEET_HREF: &str = "c3.css";

/// The bundled c3 stylesheet, for hosts that serve or inline it.
pub const STYLESHEET: &str = include_str!("../assets/c3.css");

/// Inject the chart stylesheet link into the document head.
///
/// Loading is idempotent: if a `<link>` with [`STYLESHEET_HREF`] is already
/// present the document is left unchanged, so repeated extension loads do
/// not stack duplicate links. A document without a `<head>` is left alone.
///
/// # Examples
///
/// ```rust
/// use ic3_core::HtmlDocument;
/// use ic3_extension::load_css;
///
/// let mut document = HtmlDocument::new();
/// load_css(&mut document);
/// load_css(&mut document);
///
/// let head = document.head().unwrap();
/// assert_eq!(head.child_elements().count(), 1);
/// ```
pub fn load_css(document: &mut HtmlDocument) {
    let head = match document.head_mut() {
        Some(head) => head,
        None => {
            debug!("Document has no <head>; skipping stylesheet injection");
            return;
        }
    };
    if stylesheet_linked(head) {
        debug!("Stylesheet {STYLESHEET_HREF} already linked");
        return;
    }
    let link = Element::new("link")
        .with_attr("type", "text/css")
        .with_attr("rel", "stylesheet")
        .with_attr("href", STYLESHEET_HREF);
    head.append_child(link);
}

fn stylesheet_linked(head: &Element) -> bool {
    head.child_elements()
        .any(|child| child.tag() == "link" && child.attr("href") == Some(STYLESHEET_HREF))
}
