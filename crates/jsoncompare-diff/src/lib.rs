// SPDX-License-Identifier: MIT OR Apache-2.0
//! # JSON Compare
//!
//! Bidirectional structural comparison of two JSON documents.
//!
//! Each side is canonicalized into a [`Node`] tree, then the trees are walked
//! twice: the first document against the second, then the second against the
//! first. Every discrepancy becomes a [`Diagnostic`] tagged with the side it
//! concerns and the field path where it was observed.
//!
//! ## Objects
//! Each key of one side is looked up on the other. Missing keys are reported
//! from the side that has them; keys present on both sides are compared
//! recursively.
//!
//! ## Arrays
//! Arrays are compared as sets: an element is matched when the other array
//! holds *any* structurally equal element. Matching is not one-to-one and
//! ignores position.
//!
//! ## Deduplication
//! A type or value mismatch is seen by both passes; it is reported once, from
//! the first pass. Missing fields are never deduplicated.
//!
//! ```
//! use jsoncompare_diff::{compare, is_equal};
//!
//! let diagnostics = compare(r#"{"field1": "value1"}"#, r#"{"field2": "value1"}"#);
//! let rendered: Vec<String> = diagnostics.iter().map(|d| d.render()).collect();
//! assert_eq!(
//!     rendered,
//!     vec![
//!         r#"JSON1: "field1" not found in JSON2."#,
//!         r#"JSON2: "field2" not found in JSON1."#,
//!     ]
//! );
//! assert!(is_equal(r#"{"a": [1, 2]}"#, r#"{"a": [2, 1]}"#));
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

mod compare;
mod options;
mod report;

pub use compare::{compare, compare_nodes, compare_with_options, is_equal, nodes_equivalent};
pub use options::CompareOptions;
pub use report::{Diagnostics, Report};

pub use jsoncompare_core::{Diagnostic, DiagnosticKind, Document, Node, Side};
