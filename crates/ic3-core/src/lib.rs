//! Core types for notebook output rendering
//!
//! This crate provides the shared vocabulary of the ic3 workspace: validated
//! MIME type identifiers, an owned DOM element tree with stable node handles,
//! HTML serialization and fragment parsing, and the workspace error type.
//!
//! ## Supported Features
//!
//! - **MIME types** - Validated `type/subtype` identifiers for keying
//!   renderer registries and display-priority lists
//! - **DOM tree** - Owned `Element`/`Node` tree with process-unique handles
//!   that survive moves into a parent
//! - **HTML** - Deterministic serialization with escaping and void-element
//!   handling, plus fragment parsing via html5ever
//!
//! ## Examples
//!
//! Build and serialize an output container:
//!
//! ```rust
//! use ic3_core::Element;
//!
//! let mut container = Element::new("div").with_class("output");
//! let subarea = Element::new("div").with_class("output_subarea");
//! let subarea_id = container.append_child(subarea);
//!
//! assert!(container.contains(subarea_id));
//! assert_eq!(
//!     container.to_html(),
//!     r#"<div class="output"><div class="output_subarea"></div></div>"#
//! );
//! ```
//!
//! Parse an HTML payload into an insertable node:
//!
//! ```rust
//! use ic3_core::parse_fragment;
//!
//! let node = parse_fragment("<table><tr><td>1</td></tr></table>");
//! assert_eq!(node.tag(), "table");
//! ```

pub mod dom;
pub mod error;
pub mod html;
pub mod mime;

// Re-export main types
pub use dom::{Element, HtmlDocument, Node, NodeId};
pub use error::{Ic3Error, Result};
pub use html::{
    escape_attr, escape_text, is_raw_text_element, is_void_element, parse_fragment,
    parse_fragment_file,
};
pub use mime::{MimeType, C3_DATA_MIME};
