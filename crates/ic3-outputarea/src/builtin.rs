//! Built-in renderers for the standard text MIME types

use ic3_core::{parse_fragment, Element, MimeType, NodeId, Result};

use crate::area::OutputArea;
use crate::renderer::{OutputRenderer, RenderMetadata};

/// Subarea classes for rendered HTML output.
pub const HTML_SUBAREA_CLASSES: &str = "output_html rendered_html";

/// Subarea class for plain text output.
pub const TEXT_SUBAREA_CLASSES: &str = "output_text";

/// Renders `text/html` payloads by parsing the fragment into the tree.
///
/// The parsed content lands inside a subarea carrying
/// [`HTML_SUBAREA_CLASSES`]; the subarea is registered with the keyboard
/// manager because rendered HTML can be interactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputRenderer for HtmlRenderer {
    fn mime_type(&self) -> MimeType {
        MimeType::html()
    }

    fn render(
        &self,
        data: &str,
        metadata: &RenderMetadata,
        area: &mut OutputArea,
        container: &mut Element,
    ) -> Result<NodeId> {
        let content = parse_fragment(data);
        let mut subarea =
            area.create_output_subarea(metadata, HTML_SUBAREA_CLASSES, &self.mime_type());
        area.keyboard_manager.register_events(&mut subarea);
        subarea.append_child(content);
        Ok(container.append_child(subarea))
    }
}

/// Renders `text/plain` payloads inside a `<pre>` block.
///
/// Plain text is inert, so the subarea is not registered for keyboard
/// handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    /// Create a new plain text renderer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputRenderer for PlainTextRenderer {
    fn mime_type(&self) -> MimeType {
        MimeType::plain_text()
    }

    fn render(
        &self,
        data: &str,
        metadata: &RenderMetadata,
        area: &mut OutputArea,
        container: &mut Element,
    ) -> Result<NodeId> {
        let mut subarea =
            area.create_output_subarea(metadata, TEXT_SUBAREA_CLASSES, &self.mime_type());
        let block = Element::new("pre").with_text(data);
        subarea.append_child(block);
        Ok(container.append_child(subarea))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_renderer_mime_type() {
        assert_eq!(HtmlRenderer::new().mime_type(), MimeType::html());
    }

    #[test]
    fn test_html_renderer_parses_fragment() {
        let renderer = HtmlRenderer::new();
        let mut area = OutputArea::empty();
        let mut container = Element::new("div");
        let id = renderer
            .render(
                "<p class=\"note\">hello</p>",
                &RenderMetadata::new(),
                &mut area,
                &mut container,
            )
            .unwrap();
        let subarea = container.find(id).unwrap();
        assert!(subarea.has_class("output_html"));
        assert!(subarea.has_class("rendered_html"));
        let paragraph = subarea.child_elements().next().unwrap();
        assert_eq!(paragraph.tag(), "p");
        assert_eq!(paragraph.attr("class"), Some("note"));
        assert_eq!(paragraph.text(), "hello");
    }

    #[test]
    fn test_html_renderer_registers_keyboard_events() {
        let renderer = HtmlRenderer::new();
        let mut area = OutputArea::empty();
        let mut container = Element::new("div");
        let id = renderer
            .render("<b>x</b>", &RenderMetadata::new(), &mut area, &mut container)
            .unwrap();
        assert!(
            area.keyboard_manager.is_registered(id),
            "HTML subareas can be interactive and need keyboard handling"
        );
        let subarea = container.find(id).unwrap();
        assert_eq!(subarea.attr("tabindex"), Some("-1"));
    }

    #[test]
    fn test_plain_text_renderer_wraps_in_pre() {
        let renderer = PlainTextRenderer::new();
        let mut area = OutputArea::empty();
        let mut container = Element::new("div");
        let id = renderer
            .render("x < y", &RenderMetadata::new(), &mut area, &mut container)
            .unwrap();
        let subarea = container.find(id).unwrap();
        assert!(subarea.has_class("output_text"));
        let block = subarea.child_elements().next().unwrap();
        assert_eq!(block.tag(), "pre");
        assert_eq!(block.text(), "x < y");
    }

    #[test]
    fn test_plain_text_renderer_does_not_register_keyboard_events() {
        let renderer = PlainTextRenderer::new();
        let mut area = OutputArea::empty();
        let mut container = Element::new("div");
        renderer
            .render("inert", &RenderMetadata::new(), &mut area, &mut container)
            .unwrap();
        assert!(
            area.keyboard_manager.is_empty(),
            "Plain text output is not interactive"
        );
    }

    #[test]
    fn test_renderers_leave_container_root_intact() {
        let renderer = PlainTextRenderer::new();
        let mut area = OutputArea::empty();
        let mut container = Element::new("div").with_class("output");
        renderer
            .render("text", &RenderMetadata::new(), &mut area, &mut container)
            .unwrap();
        assert!(container.has_class("output"));
        assert_eq!(container.child_elements().count(), 1);
    }
}
