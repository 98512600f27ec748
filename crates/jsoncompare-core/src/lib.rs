// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types for jsoncompare
//!
//! This crate provides the foundational types shared by the comparison engine:
//!
//! - [`node`] - Canonical node tree decoded from JSON text
//! - [`document`] - Per-side inputs and canonicalization
//! - [`diagnostic`] - Reported discrepancies and their rendering
//! - [`path`] - Field path construction
//! - [`error`] - Canonicalization errors and Result alias

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Reported discrepancies between two documents
pub mod diagnostic;
/// Document inputs and canonicalization
pub mod document;
/// Error types for canonicalization
pub mod error;
/// Canonical node tree
pub mod node;
/// Field path construction
pub mod path;

// Re-exports for convenience
pub use diagnostic::{Diagnostic, DiagnosticKind, Side};
pub use document::{Document, canonicalize};
pub use error::{DocumentError, Result};
pub use node::{Node, NodeKind};
pub use path::FieldPath;
