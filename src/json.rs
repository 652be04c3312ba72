//! Generic object/JSON conversion helpers.
//!
//! Thin wrappers over `serde_json` covering the two coursework conversions:
//! any serializable value to its JSON text, and JSON text back into any
//! deserializable shape.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CssbError;

/// Serializes any value to its JSON text.
///
/// ```rust
/// use cssb::{json, Rectangle};
///
/// let text = json::to_json(&Rectangle::new(10.0, 20.0))?;
/// assert_eq!(text, r#"{"width":10.0,"height":20.0}"#);
/// # Ok::<(), cssb::CssbError>(())
/// ```
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CssbError> {
    Ok(serde_json::to_string(value)?)
}

/// Parses JSON text into any deserializable shape.
///
/// ```rust
/// use cssb::{json, Rectangle};
///
/// let rect: Rectangle = json::from_json(r#"{"width":10.0,"height":20.0}"#)?;
/// assert_eq!(rect.area(), 200.0);
/// # Ok::<(), cssb::CssbError>(())
/// ```
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, CssbError> {
    Ok(serde_json::from_str(json)?)
}
