// SPDX-License-Identifier: MIT OR Apache-2.0
//! Two-pass structural comparison.
//!
//! `compare` canonicalizes both inputs, stops early if either is rejected,
//! then walks the first tree against the second and the second against the
//! first into one shared accumulator.

use crate::options::CompareOptions;
use crate::report::{Diagnostics, Report};
use indexmap::IndexMap;
use jsoncompare_core::{
    Diagnostic, Document, DocumentError, FieldPath, Node, Side, canonicalize,
};
use tracing::{debug, debug_span};

/// Compare two documents and list every discrepancy.
///
/// An empty result means the documents are equivalent. Each input may be
/// JSON text (`&str`, `String`), a [`serde_json::Value`], or any
/// [`Document`], e.g. one built with [`Document::structured`].
///
/// [`serde_json::Value`]: https://docs.rs/serde_json/latest/serde_json/enum.Value.html
#[must_use]
pub fn compare(first: impl Into<Document>, second: impl Into<Document>) -> Vec<Diagnostic> {
    compare_with_options(first, second, &CompareOptions::default())
}

/// [`compare`] with explicit options
#[must_use]
pub fn compare_with_options(
    first: impl Into<Document>,
    second: impl Into<Document>,
    options: &CompareOptions,
) -> Vec<Diagnostic> {
    let _span = debug_span!("compare").entered();
    let (first, second) = (first.into(), second.into());
    let mut diagnostics = Diagnostics::with_limit(options.max_diagnostics);

    if let Some((first, second)) = canonicalize_pair(&first, &second, &mut diagnostics) {
        compare_nodes(&first, &second, &mut diagnostics);
    }

    debug!(count = diagnostics.len(), "comparison finished");
    diagnostics.into_vec()
}

/// Whether [`compare`] would report nothing for these inputs
#[must_use]
pub fn is_equal(first: impl Into<Document>, second: impl Into<Document>) -> bool {
    let (first, second) = (first.into(), second.into());
    match (canonicalize(&first), canonicalize(&second)) {
        (Ok(first), Ok(second)) => nodes_equivalent(&first, &second),
        _ => false,
    }
}

/// Run both comparison passes over already canonicalized trees.
///
/// The first pass reports from the perspective of [`Side::Json1`], the
/// second from [`Side::Json2`]. Both write into the same `report`.
pub fn compare_nodes<R: Report>(first: &Node, second: &Node, report: &mut R) {
    walk(first, second, Side::Json1, &FieldPath::root(), report);
    walk(second, first, Side::Json2, &FieldPath::root(), report);
}

/// Structural equality under the comparison rules.
///
/// Containers are equal when both passes find nothing to report, so arrays
/// compare as sets at every depth. Scalars are equal when kind and value match.
#[must_use]
pub fn nodes_equivalent(first: &Node, second: &Node) -> bool {
    if !(first.is_container() && second.is_container()) {
        return first == second;
    }
    let mut probe = Probe::default();
    compare_nodes(first, second, &mut probe);
    !probe.differs
}

/// Stops the walk at the first discrepancy
#[derive(Debug, Default)]
struct Probe {
    differs: bool,
}

impl Report for Probe {
    fn report(&mut self, _: Diagnostic) {
        self.differs = true;
    }

    fn is_saturated(&self) -> bool {
        self.differs
    }
}

/// Reject unsupported inputs first, then empty or malformed ones
fn canonicalize_pair<R: Report>(
    first: &Document,
    second: &Document,
    report: &mut R,
) -> Option<(Node, Node)> {
    let sides = [(Side::Json1, first), (Side::Json2, second)];

    let mut unsupported = false;
    for (side, document) in sides {
        if let Document::Unsupported { type_name } = document {
            debug!(%side, type_name = *type_name, "unsupported input");
            let error = DocumentError::UnsupportedType {
                type_name: *type_name,
            };
            report.report(Diagnostic::rejected(side, &error));
            unsupported = true;
        }
    }
    if unsupported {
        return None;
    }

    match (canonicalize(first), canonicalize(second)) {
        (Ok(first), Ok(second)) => Some((first, second)),
        (first, second) => {
            for (side, result) in [(Side::Json1, first), (Side::Json2, second)] {
                if let Err(error) = result {
                    debug!(%side, %error, "document rejected");
                    report.report(Diagnostic::rejected(side, &error));
                }
            }
            None
        }
    }
}

fn walk<R: Report>(node: &Node, other: &Node, side: Side, path: &FieldPath, report: &mut R) {
    match (node, other) {
        (Node::Object(entries), Node::Object(other_entries)) => {
            walk_object(entries, other_entries, side, path, report);
        }
        (Node::Array(items), Node::Array(other_items)) => {
            walk_array(items, other_items, side, path, report);
        }
        _ if node.kind() != other.kind() => {
            report.report(Diagnostic::type_mismatch(
                side,
                path,
                node.kind(),
                other.kind(),
            ));
        }
        _ if node != other => {
            report.report(Diagnostic::value_mismatch(side, path, node, other));
        }
        _ => {}
    }
}

// Keys only on the other side are found when the passes swap roles.
fn walk_object<R: Report>(
    entries: &IndexMap<String, Node>,
    other_entries: &IndexMap<String, Node>,
    side: Side,
    path: &FieldPath,
    report: &mut R,
) {
    for (key, value) in entries {
        if report.is_saturated() {
            return;
        }
        let field = path.join(key);
        match other_entries.get(key) {
            Some(other_value) => walk(value, other_value, side, &field, report),
            None => report.report(Diagnostic::missing_field(side, &field)),
        }
    }
}

// Set membership, not a bijection: several items may match the same other item.
fn walk_array<R: Report>(
    items: &[Node],
    other_items: &[Node],
    side: Side,
    path: &FieldPath,
    report: &mut R,
) {
    for (index, item) in items.iter().enumerate() {
        if report.is_saturated() {
            return;
        }
        if !other_items
            .iter()
            .any(|other_item| nodes_equivalent(item, other_item))
        {
            report.report(Diagnostic::missing_array_item(side, path, index));
        }
    }
}
