//! JSON boundary helpers for the Quokka toolkit.
//!
//! Structured values cross the toolkit boundary as JSON text. This crate
//! provides both directions plus the small value objects exchanged with
//! embedders:
//!
//! - [`to_json`] — structured value → canonical text encoding (key order is
//!   serde's field order, i.e. implementation-defined)
//! - [`from_json`] — text encoding → a value exposing the capability set
//!   named by its type parameter; structural decoding only, no schema
//!   validation beyond it
//! - [`Rect`] — width/height value object with an area accessor
//!
//! # Example
//!
//! ```
//! use quokka_json::{Rect, from_json};
//!
//! let rect: Rect = from_json(r#"{"width":10,"height":20}"#)?;
//! assert_eq!(rect.area(), 200.0);
//! # Ok::<(), quokka_json::DecodeError>(())
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to encode a structured value as JSON text.
#[derive(Debug, Error)]
#[error("failed to encode value as JSON: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// Failure to decode JSON text into the requested shape.
///
/// Raised for malformed text and for text whose structure does not match
/// the target capability set.
#[derive(Debug, Error)]
#[error("failed to decode JSON: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// An axis-aligned rectangle exchanged with embedders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its extents.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area covered by the rectangle (width × height).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Encode a structured value as JSON text.
///
/// # Errors
///
/// [`EncodeError`] if the value cannot be represented as JSON (e.g. a map
/// with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(value)?)
}

/// Decode JSON text into a value exposing the capability set `T`.
///
/// The type parameter plays the role of the capability-set descriptor: the
/// text must already match `T`'s field shape.
///
/// # Errors
///
/// [`DecodeError`] if the text is malformed or does not match `T`'s shape.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(text)?)
}
