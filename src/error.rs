//! Error types for selector construction and the JSON helpers.

use thiserror::Error;

/// Errors that can occur while building a selector or converting JSON.
///
/// The builder raises its errors immediately at the offending call and
/// appends nothing, so the error names the call that broke the grammar.
///
/// # Examples
///
/// ```rust
/// use cssb::{id, CssbError};
///
/// // `element` may not follow `id`.
/// let result = id("x").element("y");
/// assert!(matches!(result, Err(CssbError::OrderViolation)));
/// ```
#[derive(Error, Debug)]
pub enum CssbError {
    /// A category call arrived out of order.
    #[error(
        "parts must appear in the sequence element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation,

    /// A second element, id, or pseudo-element was appended to one builder.
    #[error("element, id, and pseudo-element must not occur more than once")]
    DuplicateSingleton,

    /// A category call was made on a builder produced by `combine`.
    ///
    /// Combined builders hold a single precomputed selector string and
    /// cannot be extended part by part.
    #[error("a combined selector cannot be extended with additional parts")]
    CombinedSealed,

    /// JSON serialization or deserialization failed in the json helpers.
    #[error("JSON conversion failed")]
    Json(#[from] serde_json::Error),
}
