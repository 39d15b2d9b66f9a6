//! Output renderer trait and per-output metadata
//!
//! A renderer turns one MIME payload into document tree nodes inside an
//! output area. Renderers are bound to an [`OutputArea`](crate::OutputArea)
//! by MIME type and invoked during bundle negotiation; hosts can also invoke
//! a renderer directly.
//!
//! ## Examples
//!
//! ```rust
//! use ic3_core::{Element, MimeType, NodeId, Result};
//! use ic3_outputarea::{OutputArea, OutputRenderer, RenderMetadata};
//!
//! struct MarkerRenderer;
//!
//! impl OutputRenderer for MarkerRenderer {
//!     fn mime_type(&self) -> MimeType {
//!         MimeType::plain_text()
//!     }
//!
//!     fn render(
//!         &self,
//!         data: &str,
//!         metadata: &RenderMetadata,
//!         area: &mut OutputArea,
//!         container: &mut Element,
//!     ) -> Result<NodeId> {
//!         let mut subarea = area.create_output_subarea(metadata, "output_text", &self.mime_type());
//!         subarea.append_text(data);
//!         Ok(container.append_child(subarea))
//!     }
//! }
//!
//! let renderer = MarkerRenderer;
//! assert!(renderer.can_render(&MimeType::plain_text()));
//! ```

use ic3_core::{Element, MimeType, NodeId, Result};
use serde_json::{Map, Value};

use crate::area::OutputArea;

/// Per-output metadata passed through from the host.
///
/// Notebook outputs carry a free-form JSON object next to the payload
/// bundle. The area only reads conventional keys (currently the per-MIME
/// `isolated` flag) and hands the rest through to renderers untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderMetadata {
    fields: Map<String, Value>,
}

impl RenderMetadata {
    /// Create empty metadata.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Build metadata from a JSON value.
    ///
    /// Anything other than an object is treated as empty metadata; hosts
    /// occasionally send `null` here and outputs must still render.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::new(),
        }
    }

    /// Parse metadata from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Ic3Error::JsonError` if the string is not valid JSON.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// Add a field, consuming and returning the metadata (builder pattern).
    #[inline]
    #[must_use = "builder method returns the modified metadata"]
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Look up a top-level field.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Check whether the given MIME type is flagged isolated.
    ///
    /// Follows the notebook convention of nesting the flag under the MIME
    /// type: `{"text/html": {"isolated": true}}`.
    #[must_use]
    pub fn isolated(&self, mime: &MimeType) -> bool {
        self.fields
            .get(mime.as_str())
            .and_then(|entry| entry.get("isolated"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Number of top-level fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the metadata has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Trait for rendering one MIME payload into an output area.
///
/// Implementations create their subarea through
/// [`OutputArea::create_output_subarea`], fill it, append it to `container`,
/// and return the subarea's node id. On error the container must be left
/// untouched.
pub trait OutputRenderer: Send + Sync {
    /// The MIME type this renderer handles.
    fn mime_type(&self) -> MimeType;

    /// Render a payload into `container`, returning the appended subarea id.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be rendered; the container is
    /// left unchanged in that case.
    fn render(
        &self,
        data: &str,
        metadata: &RenderMetadata,
        area: &mut OutputArea,
        container: &mut Element,
    ) -> Result<NodeId>;

    /// Check if this renderer can handle the given MIME type.
    fn can_render(&self, mime: &MimeType) -> bool {
        self.mime_type() == *mime
    }
}
