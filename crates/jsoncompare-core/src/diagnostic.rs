// SPDX-License-Identifier: MIT OR Apache-2.0
//! Diagnostics: one reported discrepancy between the two inputs.
//!
//! A diagnostic owns copies of its path and rendered values; it holds no
//! reference into the node trees it was produced from. Messages use a fixed
//! template per [`DiagnosticKind`], and [`Diagnostic::render`] prefixes the
//! side tag:
//!
//! ```text
//! JSON1: "field1" not found in JSON2.
//! JSON2: "sub.field1" type mismatch in JSON1. Expected number. Found string.
//! ```

use crate::error::DocumentError;
use crate::node::{Node, NodeKind};
use crate::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which input a diagnostic concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First input
    #[serde(rename = "JSON1")]
    Json1,
    /// Second input
    #[serde(rename = "JSON2")]
    Json2,
}

impl Side {
    /// The opposite side
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Json1 => Self::Json2,
            Self::Json2 => Self::Json1,
        }
    }

    /// Literal tag used when rendering
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Json1 => "JSON1",
            Self::Json2 => "JSON2",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Input is neither JSON text nor a structured value
    UnsupportedType,
    /// Input text is empty
    EmptyDocument,
    /// Input text does not decode as JSON
    MalformedDocument,
    /// Key present on one side is absent on the other
    MissingField,
    /// Same key, different dynamic types
    TypeMismatch,
    /// Same key and type, different value
    ValueMismatch,
    /// Array element without an equal counterpart on the other side
    MissingArrayItem,
}

impl DiagnosticKind {
    /// Kinds that end a comparison before any structural walk
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::UnsupportedType | Self::EmptyDocument | Self::MalformedDocument
        )
    }

    /// Kinds subject to cross-pass deduplication
    #[must_use]
    pub const fn is_deduplicated(self) -> bool {
        matches!(
            self,
            Self::TypeMismatch | Self::ValueMismatch | Self::MissingArrayItem
        )
    }
}

/// One reported discrepancy
///
/// Built only through the constructors below; the message always matches
/// the kind and path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    side: Side,
    kind: DiagnosticKind,
    path: FieldPath,
    message: String,
}

impl Diagnostic {
    fn new(side: Side, kind: DiagnosticKind, path: FieldPath, message: String) -> Self {
        Self {
            side,
            kind,
            path,
            message,
        }
    }

    /// `path` exists on `side` but not on the other side
    #[must_use]
    pub fn missing_field(side: Side, path: &FieldPath) -> Self {
        let message = format!("\"{path}\" not found in {}.", side.other());
        Self::new(side, DiagnosticKind::MissingField, path.clone(), message)
    }

    /// Values at `path` have different dynamic types
    #[must_use]
    pub fn type_mismatch(
        side: Side,
        path: &FieldPath,
        expected: NodeKind,
        found: NodeKind,
    ) -> Self {
        let message = format!(
            "\"{path}\" type mismatch in {}. Expected {expected}. Found {found}.",
            side.other()
        );
        Self::new(side, DiagnosticKind::TypeMismatch, path.clone(), message)
    }

    /// Values at `path` share a type but differ
    #[must_use]
    pub fn value_mismatch(side: Side, path: &FieldPath, expected: &Node, found: &Node) -> Self {
        let message = format!(
            "\"{path}\" value mismatch in {}. Expected {expected}. Found {found}.",
            side.other()
        );
        Self::new(side, DiagnosticKind::ValueMismatch, path.clone(), message)
    }

    /// Element `index` of the array at `array_path` has no equal element on the other side
    #[must_use]
    pub fn missing_array_item(side: Side, array_path: &FieldPath, index: usize) -> Self {
        let path = array_path.index(index);
        let message = format!("\"{path}\" no corresponding item found in {}.", side.other());
        Self::new(side, DiagnosticKind::MissingArrayItem, path, message)
    }

    /// Input on `side` could not be canonicalized
    #[must_use]
    pub fn rejected(side: Side, error: &DocumentError) -> Self {
        Self::new(side, error.kind(), FieldPath::root(), error.to_string())
    }

    /// Side this diagnostic concerns
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Category
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Field path, empty at the root
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Message without the side tag
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `"<SIDE>: <message>"`
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.side, self.message)
    }
}
