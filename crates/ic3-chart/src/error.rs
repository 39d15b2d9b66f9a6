//! Error types for chart configuration and engine operations

use ic3_core::Ic3Error;
use thiserror::Error;

/// Error type for chart operations
#[derive(Error, Debug)]
pub enum ChartError {
    /// Payload is not valid JSON
    #[error("Failed to parse chart payload: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Payload parsed, but the top-level value is not a JSON object
    #[error("Chart configuration must be a JSON object, got {0}")]
    NotAnObject(String),

    /// A bind target reached the engine boundary
    ///
    /// Engines attach charts to elements the adapter supplies; a leftover
    /// `bindto` means sanitization was skipped and the chart would try to
    /// bind somewhere the host does not control.
    #[error("Configuration still contains a bind target: {0}")]
    BindTargetPresent(String),

    /// Error from the underlying chart engine
    #[error("Chart engine error: {0}")]
    EngineError(#[from] anyhow::Error),
}

impl From<ChartError> for Ic3Error {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::JsonError(e) => Self::JsonError(e),
            ChartError::EngineError(e) => Self::EngineError(e),
            other => Self::ChartError(other.to_string()),
        }
    }
}

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;
