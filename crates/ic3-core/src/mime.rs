//! MIME type identifiers for notebook output data
//!
//! This module defines the `MimeType` newtype used to key output renderers,
//! safe-type declarations, and display-priority entries. Registry lookups are
//! typed rather than raw strings so that a malformed identifier is rejected at
//! construction instead of silently never matching.

use crate::error::{Ic3Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// MIME type tag attached to chart payloads by the kernel-side plotting API
pub const C3_DATA_MIME: &str = "application/x-c3-data";

/// `type/subtype` with RFC 6838 restricted-name characters on both sides
static MIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9!#$&^_.+-]*/[a-z0-9][a-z0-9!#$&^_.+-]*$")
        .expect("valid MIME type regex")
});

/// Validated MIME type identifier
///
/// Stored in normalized (lowercase, trimmed) form, so two spellings of the
/// same type compare equal and hash identically in registry maps.
///
/// # Examples
///
/// ```rust
/// use ic3_core::MimeType;
///
/// let mime = MimeType::new("Application/X-C3-Data")?;
/// assert_eq!(mime.as_str(), "application/x-c3-data");
/// assert_eq!(mime, MimeType::c3_data());
/// assert!(mime.is_chart_data());
/// # Ok::<(), ic3_core::Ic3Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MimeType(String);

impl MimeType {
    /// Parse and validate a MIME type string
    ///
    /// The input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns [`Ic3Error::MimeError`] if the string does not have the
    /// `type/subtype` shape.
    pub fn new(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        if MIME_RE.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(Ic3Error::MimeError(format!(
                "invalid MIME type: '{s}'"
            )))
        }
    }

    /// The chart payload type, `application/x-c3-data`
    #[inline]
    #[must_use = "returns the chart data MIME type"]
    pub fn c3_data() -> Self {
        Self(C3_DATA_MIME.to_string())
    }

    /// The `text/html` type
    #[inline]
    #[must_use = "returns the text/html MIME type"]
    pub fn html() -> Self {
        Self("text/html".to_string())
    }

    /// The `text/plain` type
    #[inline]
    #[must_use = "returns the text/plain MIME type"]
    pub fn plain_text() -> Self {
        Self("text/plain".to_string())
    }

    /// Normalized string form
    #[inline]
    #[must_use = "returns the MIME type string"]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Top-level type, e.g. `application` in `application/x-c3-data`
    #[inline]
    #[must_use = "returns the top-level type"]
    pub fn top_level(&self) -> &str {
        match self.0.split_once('/') {
            Some((top, _)) => top,
            None => &self.0,
        }
    }

    /// Subtype, e.g. `x-c3-data` in `application/x-c3-data`
    #[inline]
    #[must_use = "returns the subtype"]
    pub fn subtype(&self) -> &str {
        match self.0.split_once('/') {
            Some((_, sub)) => sub,
            None => "",
        }
    }

    /// Check if this is the chart payload type
    #[inline]
    #[must_use = "returns whether this is the chart data type"]
    pub fn is_chart_data(&self) -> bool {
        self.0 == C3_DATA_MIME
    }

    /// Check if this is a `text/*` type
    #[inline]
    #[must_use = "returns whether this is a text type"]
    pub fn is_text(&self) -> bool {
        self.top_level() == "text"
    }

    /// Check if this is a vendor or experimental subtype (`x-` prefix)
    #[inline]
    #[must_use = "returns whether the subtype is experimental"]
    pub fn is_experimental(&self) -> bool {
        self.subtype().starts_with("x-")
    }
}

impl std::fmt::Display for MimeType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MimeType {
    type Err = Ic3Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for MimeType {
    type Error = Ic3Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<MimeType> for String {
    #[inline]
    fn from(mime: MimeType) -> Self {
        mime.0
    }
}
