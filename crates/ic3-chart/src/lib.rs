//! Chart configuration and engine bindings for notebook output
//!
//! This crate parses the JSON payloads carried by `application/x-c3-data`
//! notebook outputs and hands them to a chart engine. The payload's `bindto`
//! field names the element the charting library would normally attach to;
//! inside a notebook the host controls placement, so that field is stripped
//! by a pure sanitization step before any engine sees the configuration.
//!
//! ## Examples
//!
//! Parse, sanitize, and generate:
//!
//! ```rust
//! use ic3_chart::{C3Engine, ChartConfig, ChartEngine};
//!
//! let payload = r##"{"bindto": "#chart", "data": {"columns": [["x", 1, 2, 3]]}}"##;
//! let config = ChartConfig::parse(payload)?;
//! let chart = C3Engine::new().generate(&config.without_bind_target())?;
//!
//! assert!(chart.element().has_class("c3"));
//! # Ok::<(), ic3_chart::ChartError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use config::{ChartConfig, BIND_TARGET_FIELD};
pub use engine::{C3Engine, Chart, ChartEngine, CHART_ROOT_CLASS, CHART_SPEC_CLASS};
pub use error::{ChartError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let config = ChartConfig::parse(r##"{"bindto": "#x", "data": {}}"##)
            .expect("Failed to parse payload");
        let chart = C3Engine::new()
            .generate(&config.without_bind_target())
            .expect("Failed to generate chart");
        assert_eq!(chart.element().tag(), "div");
    }
}
