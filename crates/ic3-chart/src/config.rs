//! Chart configuration payloads
//!
//! A [`ChartConfig`] wraps the JSON object carried in an
//! `application/x-c3-data` output payload. The only field this crate
//! interprets is the bind target; everything else is chart options the engine
//! consumes untouched.
//!
//! Kernel-side plotting APIs fill in `bindto` because the charting library
//! normally attaches to a caller-chosen selector. Inside a notebook the host
//! owns element placement, so the field is stripped before the configuration
//! reaches an engine. Stripping is a pure transform: it returns a new
//! configuration and leaves the original untouched.

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON field naming the DOM element a chart would bind itself to
pub const BIND_TARGET_FIELD: &str = "bindto";

/// A chart configuration parsed from an output payload
///
/// # Examples
///
/// ```rust
/// use ic3_chart::ChartConfig;
///
/// let config = ChartConfig::parse(r##"{"bindto": "#chart", "data": {"columns": []}}"##)?;
/// assert_eq!(config.bind_target(), Some("#chart"));
///
/// let clean = config.without_bind_target();
/// assert!(!clean.has_bind_target());
/// assert_eq!(config.bind_target(), Some("#chart"), "original is unchanged");
/// # Ok::<(), ic3_chart::ChartError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartConfig {
    fields: Map<String, Value>,
}

impl ChartConfig {
    /// Parse a configuration from a serialized payload string
    ///
    /// # Errors
    /// Returns [`ChartError::JsonError`] if the payload is not valid JSON,
    /// or [`ChartError::NotAnObject`] if the top-level value is not an
    /// object.
    pub fn parse(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(value)
    }

    /// Build a configuration from an already-parsed JSON value
    ///
    /// # Errors
    /// Returns [`ChartError::NotAnObject`] if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ChartError::NotAnObject(json_type_name(&other).to_string())),
        }
    }

    /// The bind target selector, if present and a string
    #[inline]
    #[must_use = "returns the bind target selector"]
    pub fn bind_target(&self) -> Option<&str> {
        self.fields.get(BIND_TARGET_FIELD).and_then(Value::as_str)
    }

    /// Whether the configuration carries a bind target of any JSON type
    #[inline]
    #[must_use = "returns whether a bind target is present"]
    pub fn has_bind_target(&self) -> bool {
        self.fields.contains_key(BIND_TARGET_FIELD)
    }

    /// A copy of this configuration with the bind target removed
    ///
    /// All other fields are preserved as-is. Calling this on a configuration
    /// without a bind target returns an equal configuration.
    #[must_use = "returns a new configuration; the original is unchanged"]
    pub fn without_bind_target(&self) -> Self {
        let mut fields = self.fields.clone();
        fields.remove(BIND_TARGET_FIELD);
        Self { fields }
    }

    /// Look up an arbitrary configuration field
    #[inline]
    #[must_use = "returns the field value"]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The underlying field map
    #[inline]
    #[must_use = "returns the field map"]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Number of top-level fields
    #[inline]
    #[must_use = "returns the field count"]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the configuration has no fields at all
    #[inline]
    #[must_use = "returns whether the configuration is empty"]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize back to a JSON string
    ///
    /// # Errors
    /// Returns [`ChartError::JsonError`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
