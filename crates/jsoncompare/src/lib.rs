// SPDX-License-Identifier: MIT OR Apache-2.0
//! # jsoncompare
//!
//! Compare two JSON documents and get an exhaustive, path-aware list of
//! their differences.
//!
//! Each input is JSON text or a structured value that serializes to JSON.
//! Both are canonicalized into a [`Node`] tree and compared in both
//! directions. The result is a list of [`Diagnostic`]s; an empty list means
//! the documents are equivalent.
//!
//! ```
//! use jsoncompare::{compare, is_equal};
//!
//! let diagnostics = compare(
//!     r#"{"sub": {"field1": "value1", "field2": 1}}"#,
//!     r#"{"sub": {"field1": 1, "field2": 2, "field3": "value3"}}"#,
//! );
//! for diagnostic in &diagnostics {
//!     println!("{diagnostic}");
//! }
//! assert_eq!(diagnostics.len(), 3);
//! assert!(!is_equal(r#"{"a": 1}"#, r#"{"a": 2}"#));
//! ```
//!
//! ## Crates
//!
//! - [`jsoncompare-core`](jsoncompare_core) - Node tree, documents, diagnostics
//! - [`jsoncompare-diff`](jsoncompare_diff) - The comparison engine

#![doc(html_root_url = "https://docs.rs/jsoncompare/0.1.0")]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

pub use jsoncompare_core::{
    Diagnostic, DiagnosticKind, Document, DocumentError, FieldPath, Node, NodeKind, Side,
    canonicalize,
};
pub use jsoncompare_diff::{
    CompareOptions, Diagnostics, Report, compare, compare_nodes, compare_with_options, is_equal,
    nodes_equivalent,
};

/// Re-export of jsoncompare-core
pub use jsoncompare_core as core;

/// Re-export of jsoncompare-diff
pub use jsoncompare_diff as diff;

/// Compare two values that serialize to JSON.
///
/// Shorthand for [`compare`] over [`Document::structured`] inputs.
#[must_use]
pub fn compare_structured<A, B>(first: &A, second: &B) -> Vec<Diagnostic>
where
    A: serde::Serialize + ?Sized,
    B: serde::Serialize + ?Sized,
{
    compare(Document::structured(first), Document::structured(second))
}

/// Render diagnostics one per line, as `"<SIDE>: <message>"`
#[must_use]
pub fn render_all(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Diagnostics as a JSON array, for callers that emit machine-readable reports
///
/// # Errors
///
/// Returns the encoder error if serialization fails.
pub fn to_json(diagnostics: &[Diagnostic]) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(diagnostics)
}
