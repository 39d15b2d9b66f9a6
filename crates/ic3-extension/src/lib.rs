//! Notebook extension wiring c3 chart rendering into an output area
//!
//! Loading the extension teaches a host [`OutputArea`] to display
//! `application/x-c3-data` payloads: the MIME type is declared safe, moved
//! to the front of the display priority, and bound to the
//! [`C3DataRenderer`]. The chart stylesheet is linked into the host document
//! once, no matter how often the extension loads.
//!
//! ## Supported Features
//!
//! - **Chart rendering**: JSON chart configurations become mounted chart
//!   elements inside rendered-HTML subareas
//! - **Bind-target stripping**: payloads cannot pick their own mount point
//! - **Display priority**: chart payloads win over `text/html` and
//!   `text/plain` fallbacks in the same bundle
//! - **One-time styling**: idempotent stylesheet injection into `<head>`
//! - **Engine injection**: hosts can swap the charting engine
//!
//! ## Examples
//!
//! ```rust
//! use ic3_core::{Element, HtmlDocument, MimeType};
//! use ic3_extension::load_extension;
//! use ic3_outputarea::{MimeBundle, OutputArea, RenderMetadata};
//!
//! let mut area = OutputArea::new();
//! let mut document = HtmlDocument::new();
//! load_extension(&mut area, &mut document);
//!
//! let bundle = MimeBundle::new()
//!     .with(MimeType::c3_data(), r#"{"data": {"columns": [["x", 1, 2]]}}"#)
//!     .with(MimeType::plain_text(), "a chart");
//!
//! let mut container = Element::new("div");
//! area.append_mime_bundle(&bundle, &RenderMetadata::new(), &mut container)
//!     .unwrap();
//! assert!(container.to_html().contains("c3"));
//! ```

pub mod css;
pub mod renderer;

use ic3_chart::ChartEngine;
use ic3_core::{HtmlDocument, MimeType};
use ic3_outputarea::OutputArea;
use log::debug;

pub use css::{load_css, STYLESHEET, STYLESHEET_HREF};
pub use renderer::C3DataRenderer;

/// Load the extension into an output area and its host document.
///
/// Links the stylesheet, declares `application/x-c3-data` safe, prepends it
/// to the display priority, and binds the default renderer. Loading twice
/// is harmless: the stylesheet stays single, the priority entry stays
/// single, and the renderer binding is replaced.
pub fn load_extension(area: &mut OutputArea, document: &mut HtmlDocument) {
    load_extension_with_engine(area, document, Box::new(ic3_chart::C3Engine::new()));
}

/// Load the extension with a custom chart engine.
///
/// Same wiring as [`load_extension`], but chart payloads are delegated to
/// `engine` instead of the default [`C3Engine`](ic3_chart::C3Engine).
pub fn load_extension_with_engine(
    area: &mut OutputArea,
    document: &mut HtmlDocument,
    engine: Box<dyn ChartEngine>,
) {
    load_css(document);
    let mime = MimeType::c3_data();
    area.declare_safe(mime.clone());
    area.prepend_display_order(mime);
    let renderer = C3DataRenderer::with_engine(engine);
    debug!("Binding {} renderer for {}", renderer.engine_name(), MimeType::c3_data());
    area.bind_renderer(renderer);
}
