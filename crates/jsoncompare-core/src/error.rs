// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors raised while turning a [`Document`](crate::Document) into a [`Node`](crate::Node).
//!
//! The `Display` text of each variant is the exact message carried by the
//! matching short-circuit diagnostic.

use crate::diagnostic::DiagnosticKind;
use thiserror::Error;

/// Result type alias for canonicalization
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Reasons a document cannot be canonicalized
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input is neither JSON text nor a structured value
    #[error("Invalid type. Only strings or structs are supported.")]
    UnsupportedType {
        /// Rust type name of the rejected input
        type_name: &'static str,
    },

    /// Input text is the empty string
    #[error("JSON string cannot be empty.")]
    Empty,

    /// Input text is not well-formed JSON
    #[error("JSON string is malformed: {0}.")]
    Malformed(#[from] serde_json::Error),
}

impl DocumentError {
    /// Diagnostic kind reported for this error
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::UnsupportedType { .. } => DiagnosticKind::UnsupportedType,
            Self::Empty => DiagnosticKind::EmptyDocument,
            Self::Malformed(_) => DiagnosticKind::MalformedDocument,
        }
    }
}
