//! Chart engine trait and the C3 embed engine
//!
//! An engine turns a sanitized [`ChartConfig`] into a detached chart element.
//! The shipped [`C3Engine`] does no layout or drawing of its own; it builds
//! the root element the C3 runtime hydrates client-side.

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use ic3_core::Element;

/// CSS class carried by every chart root the C3 runtime hydrates
pub const CHART_ROOT_CLASS: &str = "c3";

/// CSS class of the embedded configuration script inside a chart root
pub const CHART_SPEC_CLASS: &str = "c3-spec";

/// A rendered chart: the detached root element produced by an engine
///
/// The element is not attached anywhere yet. The caller appends it into a
/// container and takes no further ownership of chart internals.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    element: Element,
}

impl Chart {
    /// Wrap an engine-produced root element
    #[inline]
    #[must_use = "creates a chart handle for the element"]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The chart's root element
    #[inline]
    #[must_use = "returns the chart root element"]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Consume the handle, yielding the root element for insertion
    #[inline]
    #[must_use = "returns the chart root element"]
    pub fn into_element(self) -> Element {
        self.element
    }
}

/// Main trait for chart engines
///
/// Each engine binding implements this trait to turn a sanitized
/// configuration into a chart. Engines must refuse configurations that still
/// carry a bind target; element placement belongs to the host, never to the
/// charting library.
pub trait ChartEngine: Send + Sync {
    /// Engine name for logs and diagnostics
    fn name(&self) -> &str;

    /// Generate a chart from a sanitized configuration
    ///
    /// # Errors
    /// Returns an error if the configuration still carries a bind target or
    /// if the engine itself fails.
    fn generate(&self, config: &ChartConfig) -> Result<Chart>;
}

/// Embed engine for the C3 charting runtime
///
/// Produces a `<div class="c3">` holding the configuration as an embedded
/// `application/json` script, the shape the client-side runtime picks up and
/// hydrates into an SVG chart. Rendering itself stays in the runtime. The
/// embedded JSON is script-safe: `<`, `>`, and `&` are written as
/// `<`-style escapes.
///
/// # Examples
///
/// ```rust
/// use ic3_chart::{C3Engine, ChartConfig, ChartEngine};
///
/// let engine = C3Engine::new();
/// let config = ChartConfig::parse(r#"{"data": {"columns": [["y", 1, 2]]}}"#)?;
/// let chart = engine.generate(&config)?;
///
/// assert!(chart.element().has_class("c3"));
/// # Ok::<(), ic3_chart::ChartError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct C3Engine;

impl C3Engine {
    /// Create the engine
    #[inline]
    #[must_use = "creates a C3 engine"]
    pub const fn new() -> Self {
        Self
    }
}

impl ChartEngine for C3Engine {
    fn name(&self) -> &str {
        "c3"
    }

    fn generate(&self, config: &ChartConfig) -> Result<Chart> {
        if config.has_bind_target() {
            return Err(ChartError::BindTargetPresent(
                config.bind_target().unwrap_or("<non-string target>").to_string(),
            ));
        }

        let spec = escape_json_for_script(&config.to_json()?);
        let mut root = Element::new("div").with_class(CHART_ROOT_CLASS);
        let script = Element::new("script")
            .with_attr("type", "application/json")
            .with_class(CHART_SPEC_CLASS)
            .with_text(&spec);
        root.append_child(script);
        Ok(Chart::new(root))
    }
}

/// Escape a serialized JSON document for raw-text `<script>` embedding
///
/// In JSON, `<`, `>`, and `&` occur only inside strings, where `\u` escapes
/// denote the same characters: the parsed value is unchanged, and the output
/// can never contain a `</script` sequence.
fn escape_json_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_chart_root_shape() {
        let engine = C3Engine::new();
        let config =
            ChartConfig::from_value(json!({"data": {"columns": [["x", 1, 2, 3]]}})).unwrap();

        let chart = engine.generate(&config).unwrap();
        let root = chart.element();

        assert_eq!(root.tag(), "div");
        assert!(root.has_class(CHART_ROOT_CLASS));
        assert_eq!(root.element_count(), 2, "root plus the spec script");

        let script = root
            .child_elements()
            .next()
            .expect("chart root holds a spec script");
        assert_eq!(script.tag(), "script");
        assert_eq!(script.attr("type"), Some("application/json"));
        assert!(script.has_class(CHART_SPEC_CLASS));
    }

    #[test]
    fn test_embedded_spec_matches_config() {
        let engine = C3Engine::new();
        let config = ChartConfig::from_value(json!({
            "data": {"columns": [["y", 10, 20]]},
            "axis": {"rotated": true}
        }))
        .unwrap();

        let chart = engine.generate(&config).unwrap();
        let script = chart
            .element()
            .child_elements()
            .next()
            .expect("spec script present");

        let embedded = ChartConfig::parse(&script.text()).unwrap();
        assert_eq!(embedded, config, "embedded spec should equal the input");
    }

    #[test]
    fn test_embedded_spec_is_script_safe() {
        let engine = C3Engine::new();
        let config = ChartConfig::from_value(json!({
            "axis": {"x": {"label": "a<b & c>d"}}
        }))
        .unwrap();

        let chart = engine.generate(&config).unwrap();
        let script = chart
            .element()
            .child_elements()
            .next()
            .expect("spec script present");
        let text = script.text();
        for c in ['<', '>', '&'] {
            assert!(!text.contains(c), "Unescaped {c:?} in embedded spec: {text}");
        }

        let embedded = ChartConfig::parse(&text).unwrap();
        assert_eq!(embedded, config, "escaping must not change the parsed value");

        let html = chart.element().to_html();
        assert!(
            !html.contains("&lt;"),
            "Entities are never decoded inside <script>, so none may be written: {html}"
        );
    }

    #[test]
    fn test_embedded_spec_cannot_close_its_script() {
        let engine = C3Engine::new();
        let config =
            ChartConfig::from_value(json!({"title": "</script><b>pwn</b>"})).unwrap();

        let chart = engine.generate(&config).unwrap();
        let html = chart.element().to_html();
        assert_eq!(
            html.matches("</script>").count(),
            1,
            "Only the element's own closing tag may appear: {html}"
        );

        let script = chart.element().child_elements().next().unwrap();
        assert_eq!(
            ChartConfig::parse(&script.text()).unwrap(),
            config,
            "the hostile title must round-trip unchanged"
        );
    }

    #[test]
    fn test_generate_rejects_bind_target() {
        let engine = C3Engine::new();
        let config = ChartConfig::from_value(json!({"bindto": "#chart"})).unwrap();

        match engine.generate(&config) {
            Err(ChartError::BindTargetPresent(target)) => assert_eq!(target, "#chart"),
            other => panic!("Expected BindTargetPresent, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_rejects_non_string_bind_target() {
        let engine = C3Engine::new();
        let config = ChartConfig::from_value(json!({"bindto": 42})).unwrap();

        match engine.generate(&config) {
            Err(ChartError::BindTargetPresent(target)) => {
                assert_eq!(target, "<non-string target>");
            }
            other => panic!("Expected BindTargetPresent, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_empty_config() {
        let engine = C3Engine::new();
        let config = ChartConfig::parse("{}").unwrap();
        let chart = engine.generate(&config).unwrap();
        assert!(chart.element().has_class(CHART_ROOT_CLASS));
    }

    #[test]
    fn test_into_element_preserves_id() {
        let engine = C3Engine::new();
        let config = ChartConfig::parse("{}").unwrap();
        let chart = engine.generate(&config).unwrap();

        let id = chart.element().id();
        let element = chart.into_element();
        assert_eq!(element.id(), id);
    }

    #[test]
    fn test_engine_as_trait_object() {
        let engine: Box<dyn ChartEngine> = Box::new(C3Engine::new());
        assert_eq!(engine.name(), "c3");

        let config = ChartConfig::parse("{}").unwrap();
        assert!(engine.generate(&config).is_ok());
    }

    #[test]
    fn test_engine_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<C3Engine>();
    }
}
