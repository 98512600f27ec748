// SPDX-License-Identifier: MIT OR Apache-2.0
//! Document inputs and canonicalization
//!
//! A [`Document`] is one side of a comparison. It is either JSON text or a
//! structured value. Structured values are encoded to canonical JSON text
//! up front and then follow the same decoding path as text, so a struct and
//! its JSON rendering canonicalize to the same [`Node`].
//!
//! ```
//! use jsoncompare_core::{Document, canonicalize};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Record {
//!     field1: String,
//! }
//!
//! let from_struct = Document::structured(&Record { field1: "value1".into() });
//! let from_text = Document::text(r#"{"field1": "value1"}"#);
//! assert_eq!(canonicalize(&from_struct).unwrap(), canonicalize(&from_text).unwrap());
//! ```

use crate::error::{DocumentError, Result};
use crate::node::Node;
use serde::Serialize;

/// One input to a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// JSON text, decoded as-is
    Text(String),
    /// Canonical JSON text encoded from a structured value
    Structured(String),
    /// Input of a kind that cannot be compared
    Unsupported {
        /// Rust type name of the rejected input
        type_name: &'static str,
    },
}

impl Document {
    /// Document from JSON text
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Document from a structured value.
    ///
    /// Values that encode to an object or array are structured documents.
    /// Values that encode to a JSON string are treated as JSON text. Bare
    /// numbers, booleans, null, and values the encoder rejects are unsupported.
    #[must_use]
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Self {
        let type_name = std::any::type_name::<T>();
        serde_json::to_string(value).map_or(Self::Unsupported { type_name }, |encoded| {
            Self::from_encoded(encoded, type_name)
        })
    }

    fn from_encoded(encoded: String, type_name: &'static str) -> Self {
        match encoded.as_bytes().first() {
            Some(b'{' | b'[') => Self::Structured(encoded),
            Some(b'"') => serde_json::from_str::<String>(&encoded)
                .map_or(Self::Unsupported { type_name }, Self::Text),
            _ => Self::Unsupported { type_name },
        }
    }

    /// Whether this document can be canonicalized at all
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}

/// Decode a document into its canonical node tree.
///
/// # Errors
///
/// - [`DocumentError::UnsupportedType`] for unsupported inputs
/// - [`DocumentError::Empty`] when the text is the empty string
/// - [`DocumentError::Malformed`] when the text is not well-formed JSON
pub fn canonicalize(document: &Document) -> Result<Node> {
    match document {
        Document::Text(text) | Document::Structured(text) => decode(text),
        Document::Unsupported { type_name } => Err(DocumentError::UnsupportedType {
            type_name: *type_name,
        }),
    }
}

fn decode(text: &str) -> Result<Node> {
    if text.is_empty() {
        return Err(DocumentError::Empty);
    }
    Ok(serde_json::from_str(text)?)
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Document {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        Self::structured(&value)
    }
}

impl From<&serde_json::Value> for Document {
    fn from(value: &serde_json::Value) -> Self {
        Self::structured(value)
    }
}

impl From<&Node> for Document {
    fn from(node: &Node) -> Self {
        Self::structured(node)
    }
}

macro_rules! unsupported_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Document {
                fn from(_: $ty) -> Self {
                    Self::Unsupported { type_name: stringify!($ty) }
                }
            }
        )*
    };
}

unsupported_from!(f32, f64, i32, i64, u32, u64, usize, bool);
