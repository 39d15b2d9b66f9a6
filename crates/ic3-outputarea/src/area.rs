//! Output area: renderer registry, trust model, and bundle negotiation
//!
//! The [`OutputArea`] is the host side of output rendering. It owns the
//! renderer bindings, the display-priority order, the set of MIME types that
//! are safe to render without trust, and the keyboard bookkeeping for
//! interactive subareas.
//!
//! ## Supported Features
//!
//! - Binding one renderer per MIME type, with replacement on re-binding
//! - Display-priority negotiation over a [`MimeBundle`]
//! - A trust model: unsafe types only render in trusted areas
//! - Scoped subarea creation with stable class markers
//!
//! ## Examples
//!
//! ```rust
//! use ic3_core::Element;
//! use ic3_core::MimeType;
//! use ic3_outputarea::{MimeBundle, OutputArea, RenderMetadata};
//!
//! let mut area = OutputArea::new();
//! let mut container = Element::new("div");
//!
//! let bundle = MimeBundle::new()
//!     .with(MimeType::html(), "<b>bold</b>")
//!     .with(MimeType::plain_text(), "bold");
//!
//! let subarea = area
//!     .append_mime_bundle(&bundle, &RenderMetadata::new(), &mut container)
//!     .unwrap();
//! assert!(container.find(subarea).is_some());
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use ic3_core::{Element, Ic3Error, MimeType, NodeId, Result};
use log::{debug, warn};

use crate::builtin::{HtmlRenderer, PlainTextRenderer};
use crate::keyboard::KeyboardManager;
use crate::renderer::{OutputRenderer, RenderMetadata};

/// Class carried by every output subarea.
pub const SUBAREA_CLASS: &str = "output_subarea";

/// Class added to subareas whose MIME type is flagged isolated.
pub const ISOLATED_CLASS: &str = "output_isolated";

/// One output's payloads, keyed by MIME type.
///
/// A display payload usually arrives in several representations at once
/// (`text/html` plus a `text/plain` fallback, for example). The area picks
/// the best one during negotiation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MimeBundle {
    payloads: HashMap<MimeType, String>,
}

impl MimeBundle {
    /// Create an empty bundle.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            payloads: HashMap::new(),
        }
    }

    /// Add a payload, consuming and returning the bundle (builder pattern).
    #[inline]
    #[must_use = "builder method returns the modified bundle"]
    pub fn with(mut self, mime: MimeType, payload: &str) -> Self {
        self.payloads.insert(mime, payload.to_string());
        self
    }

    /// Insert a payload for a MIME type, replacing any previous one.
    pub fn insert(&mut self, mime: MimeType, payload: impl Into<String>) {
        self.payloads.insert(mime, payload.into());
    }

    /// Look up the payload for a MIME type.
    #[inline]
    #[must_use]
    pub fn get(&self, mime: &MimeType) -> Option<&str> {
        self.payloads.get(mime).map(String::as_str)
    }

    /// Check whether a payload exists for a MIME type.
    #[inline]
    #[must_use]
    pub fn contains(&self, mime: &MimeType) -> bool {
        self.payloads.contains_key(mime)
    }

    /// The MIME types present in the bundle, in no particular order.
    pub fn mime_types(&self) -> impl Iterator<Item = &MimeType> {
        self.payloads.keys()
    }

    /// Number of payloads.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Check if the bundle has no payloads.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

/// Host model for notebook output rendering.
///
/// Renderers are bound per MIME type; [`append_mime_bundle`] walks the
/// display-priority order and dispatches the first payload that is present,
/// allowed at the current trust level, and has a bound renderer. A fresh
/// area starts with the built-in `text/html` and `text/plain` renderers and
/// is untrusted.
///
/// [`append_mime_bundle`]: OutputArea::append_mime_bundle
pub struct OutputArea {
    safe_types: HashSet<MimeType>,
    display_order: Vec<MimeType>,
    renderers: HashMap<MimeType, Arc<dyn OutputRenderer>>,
    /// Keyboard bookkeeping shared with renderers during dispatch.
    pub keyboard_manager: KeyboardManager,
    subarea_counter: u64,
    trusted: bool,
}

impl OutputArea {
    /// Create an area with the built-in renderers bound.
    ///
    /// `text/html` and `text/plain` are bound, declared safe, and placed in
    /// the display order with HTML preferred. The area starts untrusted.
    #[must_use]
    pub fn new() -> Self {
        let mut area = Self::empty();
        area.declare_safe(MimeType::html());
        area.declare_safe(MimeType::plain_text());
        area.display_order = vec![MimeType::html(), MimeType::plain_text()];
        area.bind_renderer(HtmlRenderer::new());
        area.bind_renderer(PlainTextRenderer::new());
        area
    }

    /// Create an area with no renderers, no safe types, and an empty
    /// display order.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            safe_types: HashSet::new(),
            display_order: Vec::new(),
            renderers: HashMap::new(),
            keyboard_manager: KeyboardManager::new(),
            subarea_counter: 0,
            trusted: false,
        }
    }

    /// Set the trust level, consuming and returning the area (builder pattern).
    #[inline]
    #[must_use = "builder method returns the modified area"]
    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }

    /// Check whether the area renders unsafe MIME types.
    #[inline]
    #[must_use]
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// Change the trust level in place.
    #[inline]
    pub fn set_trusted(&mut self, trusted: bool) {
        self.trusted = trusted;
    }

    /// Declare a MIME type safe to render without trust.
    pub fn declare_safe(&mut self, mime: MimeType) {
        self.safe_types.insert(mime);
    }

    /// Check whether a MIME type is declared safe.
    #[inline]
    #[must_use]
    pub fn is_safe(&self, mime: &MimeType) -> bool {
        self.safe_types.contains(mime)
    }

    /// Move or insert a MIME type at the front of the display priority.
    ///
    /// The order never holds duplicates: prepending a type already present
    /// moves it to the front.
    pub fn prepend_display_order(&mut self, mime: MimeType) {
        self.display_order.retain(|existing| existing != &mime);
        self.display_order.insert(0, mime);
    }

    /// The current display-priority order, most preferred first.
    #[inline]
    #[must_use]
    pub fn display_order(&self) -> &[MimeType] {
        &self.display_order
    }

    /// Bind a renderer for its MIME type, replacing any previous binding.
    pub fn bind_renderer<R: OutputRenderer + 'static>(&mut self, renderer: R) {
        let mime = renderer.mime_type();
        if self.renderers.insert(mime.clone(), Arc::new(renderer)).is_some() {
            warn!("Replacing output renderer for {mime}");
        }
    }

    /// Check whether a renderer is bound for a MIME type.
    #[inline]
    #[must_use]
    pub fn has_renderer(&self, mime: &MimeType) -> bool {
        self.renderers.contains_key(mime)
    }

    /// Number of bound renderers.
    #[inline]
    #[must_use]
    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    /// Create a scoped subarea div for one rendered output.
    ///
    /// The div carries [`SUBAREA_CLASS`], the renderer's own classes, and a
    /// sequential `data-subarea` index. If the metadata flags `mime` as
    /// isolated, [`ISOLATED_CLASS`] is added as well.
    pub fn create_output_subarea(
        &mut self,
        metadata: &RenderMetadata,
        classes: &str,
        mime: &MimeType,
    ) -> Element {
        self.subarea_counter += 1;
        let mut subarea = Element::new("div")
            .with_class(SUBAREA_CLASS)
            .with_attr("data-subarea", &self.subarea_counter.to_string());
        subarea.add_class(classes);
        if metadata.isolated(mime) {
            subarea.add_class(ISOLATED_CLASS);
        }
        subarea
    }

    /// Number of subareas created so far.
    #[inline]
    #[must_use]
    pub fn subarea_count(&self) -> u64 {
        self.subarea_counter
    }

    /// Render the best available payload from a bundle into `container`.
    ///
    /// Walks the display-priority order and dispatches the first MIME type
    /// that is present in the bundle, allowed at the current trust level,
    /// and has a bound renderer. Returns the appended subarea's id.
    ///
    /// # Errors
    ///
    /// Returns `Ic3Error::RenderError` if nothing in the bundle is
    /// renderable. Renderer failures propagate unchanged; the chosen type is
    /// not retried with a lower-priority one.
    pub fn append_mime_bundle(
        &mut self,
        bundle: &MimeBundle,
        metadata: &RenderMetadata,
        container: &mut Element,
    ) -> Result<NodeId> {
        let order = self.display_order.clone();
        for mime in order {
            let payload = match bundle.get(&mime) {
                Some(payload) => payload,
                None => continue,
            };
            if !self.trusted && !self.is_safe(&mime) {
                debug!("Skipping unsafe type {mime} in untrusted output area");
                continue;
            }
            let renderer = match self.renderers.get(&mime) {
                Some(renderer) => Arc::clone(renderer),
                None => {
                    debug!("No renderer bound for {mime}, trying next type");
                    continue;
                }
            };
            return renderer.render(payload, metadata, self, container);
        }

        let mut available: Vec<&str> = bundle.mime_types().map(MimeType::as_str).collect();
        available.sort_unstable();
        Err(Ic3Error::RenderError(format!(
            "No renderable MIME type in bundle: [{}]",
            available.join(", ")
        )))
    }
}

impl Default for OutputArea {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OutputArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<&str> = self.renderers.keys().map(MimeType::as_str).collect();
        bound.sort_unstable();
        f.debug_struct("OutputArea")
            .field("display_order", &self.display_order)
            .field("renderers", &bound)
            .field("trusted", &self.trusted)
            .field("subarea_counter", &self.subarea_counter)
            .finish()
    }
}
