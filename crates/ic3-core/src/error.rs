//! Error types for output rendering operations.
//!
//! This module defines the error types that can occur while parsing chart
//! payloads, manipulating the DOM tree, and dispatching output renderers.

use thiserror::Error;

/// Error types that can occur during output rendering.
///
/// This enum covers all possible error conditions including payload parsing
/// failures, MIME type validation, renderer dispatch, and chart engine errors.
///
/// # Examples
///
/// ## Pattern Matching on Errors
///
/// ```rust,ignore
/// // Note: OutputArea is in the ic3-outputarea crate
/// use ic3_core::Ic3Error;
/// use ic3_outputarea::OutputArea;
///
/// match area.append_mime_bundle(&bundle, &metadata, &mut container) {
///     Ok(id) => println!("Inserted subarea {id}"),
///     Err(Ic3Error::JsonError(e)) => eprintln!("Bad payload: {e}"),
///     Err(Ic3Error::RenderError(msg)) => eprintln!("No renderer: {msg}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
///
/// ## Using the Result Type Alias
///
/// ```rust
/// use ic3_core::{MimeType, Result};
///
/// fn chart_mime() -> Result<MimeType> {
///     let mime = MimeType::new("application/x-c3-data")?;
///     Ok(mime)
/// }
/// # chart_mime().unwrap();
/// ```
#[derive(Error, Debug)]
pub enum Ic3Error {
    /// File I/O error.
    ///
    /// This occurs when reading HTML fragment files or stylesheet assets
    /// fails, such as file not found or permission denied.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    ///
    /// This occurs when a chart payload or render metadata is not valid JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// MIME type validation error.
    ///
    /// This occurs when a string does not have the `type/subtype` shape
    /// required of a MIME type identifier.
    #[error("MIME type error: {0}")]
    MimeError(String),

    /// Renderer dispatch error.
    ///
    /// This occurs when an output bundle contains no MIME type that is both
    /// renderable and allowed for the current trust level.
    #[error("Render error: {0}")]
    RenderError(String),

    /// Chart configuration error.
    ///
    /// This occurs when a chart payload is structurally unusable, for example
    /// when it is not a JSON object or still carries a bind target at the
    /// engine boundary.
    #[error("Chart error: {0}")]
    ChartError(String),

    /// Error from a chart engine implementation.
    #[error("Engine error: {0}")]
    EngineError(#[from] anyhow::Error),
}

/// Type alias for [`Result<T, Ic3Error>`].
///
/// # Examples
///
/// ```rust
/// use ic3_core::{parse_fragment, Element, Result};
///
/// fn hello() -> Result<Element> {
///     Ok(parse_fragment("<p>hello</p>"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Ic3Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_error_display() {
        let error = Ic3Error::MimeError("missing subtype in 'text'".to_string());
        let display = format!("{error}");
        assert_eq!(display, "MIME type error: missing subtype in 'text'");
        assert!(display.contains("MIME"));
        assert!(display.contains("subtype"));
    }

    #[test]
    fn test_render_error_display() {
        let error = Ic3Error::RenderError("no renderer bound for text/html".to_string());
        let display = format!("{error}");
        assert_eq!(display, "Render error: no renderer bound for text/html");
        assert!(display.contains("Render"));
        assert!(display.contains("text/html"));
    }

    #[test]
    fn test_chart_error_display() {
        let error = Ic3Error::ChartError("payload is not a JSON object".to_string());
        let display = format!("{error}");
        assert_eq!(display, "Chart error: payload is not a JSON object");
    }

    #[test]
    fn test_io_error_conversion() {
        // Test automatic conversion from std::io::Error
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ic3_err: Ic3Error = io_err.into();

        match ic3_err {
            Ic3Error::IoError(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("file not found"));
            }
            _ => panic!("Expected IoError variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        // Test automatic conversion from serde_json::Error
        let json_str = "{not valid json";
        let json_err = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let ic3_err: Ic3Error = json_err.into();

        match ic3_err {
            Ic3Error::JsonError(e) => {
                assert!(!e.to_string().is_empty(), "JSON error message should not be empty");
            }
            _ => panic!("Expected JsonError variant"),
        }
    }

    #[test]
    fn test_engine_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("chart runtime rejected the spec");
        let ic3_err: Ic3Error = anyhow_err.into();

        match ic3_err {
            Ic3Error::EngineError(e) => {
                assert!(e.to_string().contains("chart runtime rejected"));
            }
            _ => panic!("Expected EngineError variant"),
        }
    }

    #[test]
    fn test_error_debug_format() {
        let error = Ic3Error::RenderError("test error".to_string());
        let debug = format!("{error:?}");
        assert!(debug.contains("RenderError"));
        assert!(debug.contains("test error"));
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        // Test that errors propagate correctly with ? operator
        fn inner_function() -> Result<String> {
            Err(Ic3Error::MimeError("no slash".to_string()))
        }

        fn outer_function() -> Result<String> {
            let _result = inner_function()?;
            Ok("should not reach".to_string())
        }

        match outer_function() {
            Err(Ic3Error::MimeError(msg)) => assert_eq!(msg, "no slash"),
            _ => panic!("Expected MimeError to propagate"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_err() -> Result<String> {
            Err(Ic3Error::RenderError("failure".to_string()))
        }

        assert_eq!(returns_ok().unwrap(), "success");
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_size() {
        // Verify error size is reasonable (errors should be small to avoid stack issues)
        use std::mem::size_of;
        let size = size_of::<Ic3Error>();

        assert!(
            size < 256,
            "Ic3Error size is {size} bytes, consider boxing large variants"
        );
    }
}
