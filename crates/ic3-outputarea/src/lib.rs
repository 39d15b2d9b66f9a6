//! Notebook output-area host model for ic3_rs
//!
//! This crate models the host side of notebook output rendering: an
//! [`OutputArea`] that owns renderer bindings, display priority, and the
//! trust model, plus the [`OutputRenderer`] trait that extensions implement
//! to add new MIME types.
//!
//! ## Supported Features
//!
//! - **Renderer registry**: one renderer per MIME type, replace on re-bind
//! - **Display priority**: negotiation picks the best payload in a bundle
//! - **Trust model**: unsafe types only render in trusted areas
//! - **Built-ins**: `text/html` and `text/plain` renderers out of the box
//! - **Subarea scoping**: stable `output_subarea` class markers and keyboard
//!   bookkeeping for interactive output
//!
//! ## Examples
//!
//! ```rust
//! use ic3_core::{Element, MimeType};
//! use ic3_outputarea::{MimeBundle, OutputArea, RenderMetadata};
//!
//! let mut area = OutputArea::new();
//! let mut container = Element::new("div");
//!
//! let bundle = MimeBundle::new().with(MimeType::plain_text(), "hello");
//! area.append_mime_bundle(&bundle, &RenderMetadata::new(), &mut container)
//!     .unwrap();
//!
//! assert_eq!(container.text(), "hello");
//! ```

pub mod area;
pub mod builtin;
pub mod keyboard;
pub mod renderer;

pub use area::{MimeBundle, OutputArea, ISOLATED_CLASS, SUBAREA_CLASS};
pub use builtin::{HtmlRenderer, PlainTextRenderer, HTML_SUBAREA_CLASSES, TEXT_SUBAREA_CLASSES};
pub use keyboard::KeyboardManager;
pub use renderer::{OutputRenderer, RenderMetadata};
