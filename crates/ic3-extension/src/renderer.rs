//! The `application/x-c3-data` output renderer

use std::fmt;

use ic3_chart::{C3Engine, ChartConfig, ChartEngine};
use ic3_core::{Element, MimeType, NodeId, Result};
use ic3_outputarea::{OutputArea, OutputRenderer, RenderMetadata, HTML_SUBAREA_CLASSES};

/// Renders chart payloads by delegating to a [`ChartEngine`].
///
/// The payload is parsed as a JSON chart configuration, any bind target is
/// stripped (the renderer decides where output mounts, never the payload),
/// and the engine's chart element is mounted inside a rendered-HTML subarea.
///
/// # Examples
///
/// ```rust
/// use ic3_core::{Element, MimeType};
/// use ic3_extension::C3DataRenderer;
/// use ic3_outputarea::{OutputArea, OutputRenderer, RenderMetadata};
///
/// let renderer = C3DataRenderer::new();
/// assert!(renderer.can_render(&MimeType::c3_data()));
///
/// let mut area = OutputArea::new();
/// let mut container = Element::new("div");
/// let subarea = renderer
///     .render(
///         r#"{"data": {"columns": [["x", 1, 2, 3]]}}"#,
///         &RenderMetadata::new(),
///         &mut area,
///         &mut container,
///     )
///     .unwrap();
/// assert!(container.find(subarea).is_some());
/// ```
pub struct C3DataRenderer {
    engine: Box<dyn ChartEngine>,
}

impl C3DataRenderer {
    /// Create a renderer backed by the default [`C3Engine`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Box::new(C3Engine::new()),
        }
    }

    /// Create a renderer backed by a custom engine.
    #[must_use]
    pub fn with_engine(engine: Box<dyn ChartEngine>) -> Self {
        Self { engine }
    }

    /// Name of the backing engine, for logs and diagnostics.
    #[inline]
    #[must_use]
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }
}

impl Default for C3DataRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for C3DataRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("C3DataRenderer")
            .field("engine", &self.engine.name())
            .finish()
    }
}

impl OutputRenderer for C3DataRenderer {
    fn mime_type(&self) -> MimeType {
        MimeType::c3_data()
    }

    /// Render a chart payload into `container`.
    ///
    /// The subarea carries the rendered-HTML classes and is registered for
    /// keyboard handling like any interactive output. On any failure the
    /// container is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Ic3Error::JsonError` for malformed payloads,
    /// `Ic3Error::ChartError` for payloads that are not JSON objects, and
    /// propagates engine failures.
    fn render(
        &self,
        data: &str,
        metadata: &RenderMetadata,
        area: &mut OutputArea,
        container: &mut Element,
    ) -> Result<NodeId> {
        let config = ChartConfig::parse(data)?;
        let sanitized = config.without_bind_target();

        let mut subarea =
            area.create_output_subarea(metadata, HTML_SUBAREA_CLASSES, &MimeType::html());
        area.keyboard_manager.register_events(&mut subarea);

        let chart = self.engine.generate(&sanitized)?;
        subarea.append_child(chart.into_element());
        Ok(container.append_child(subarea))
    }
}
