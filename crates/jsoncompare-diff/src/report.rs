// SPDX-License-Identifier: MIT OR Apache-2.0
//! Diagnostic sinks.
//!
//! The comparison walk never owns its output. It pushes every discrepancy into
//! a [`Report`] implementation passed down the recursion. [`Diagnostics`] is
//! the accumulator behind [`compare`](crate::compare). It applies the
//! cross-pass deduplication rule and the optional size cap.

use ahash::AHashSet;
use jsoncompare_core::{Diagnostic, DiagnosticKind, FieldPath, Side};
use std::num::NonZeroUsize;
use tracing::trace;

/// Receiver of diagnostics produced by a comparison walk
pub trait Report {
    /// Record one diagnostic
    fn report(&mut self, diagnostic: Diagnostic);

    /// Whether the walk can stop; checked before each key and array element
    fn is_saturated(&self) -> bool {
        false
    }
}

/// Keeps every diagnostic, duplicates included
impl Report for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DedupKey {
    side: Option<Side>,
    kind: DiagnosticKind,
    path: FieldPath,
}

impl DedupKey {
    fn of(diagnostic: &Diagnostic) -> Option<Self> {
        let kind = diagnostic.kind();
        if !kind.is_deduplicated() {
            return None;
        }
        // Both passes see the same mismatch at the same path, once from each
        // side. A missing array item is directional and keyed by side too.
        let side = (kind == DiagnosticKind::MissingArrayItem).then_some(diagnostic.side());
        Some(Self {
            side,
            kind,
            path: diagnostic.path().clone(),
        })
    }
}

/// Ordered, deduplicated diagnostic list
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
    seen: AHashSet<DedupKey>,
    limit: Option<NonZeroUsize>,
}

impl Diagnostics {
    /// Empty, uncapped list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty list holding at most `limit` diagnostics
    #[must_use]
    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Number of recorded diagnostics
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recorded diagnostics in order
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Iterate over recorded diagnostics in order
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Consume into the ordered list
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Report for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        if self.is_saturated() {
            return;
        }
        if let Some(key) = DedupKey::of(&diagnostic)
            && !self.seen.insert(key)
        {
            trace!(%diagnostic, "duplicate suppressed");
            return;
        }
        trace!(
            side = %diagnostic.side(),
            kind = ?diagnostic.kind(),
            path = %diagnostic.path(),
            "diagnostic"
        );
        self.items.push(diagnostic);
    }

    fn is_saturated(&self) -> bool {
        self.limit
            .is_some_and(|limit| self.items.len() >= limit.get())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsoncompare_core::{Node, NodeKind};

    fn path(key: &str) -> FieldPath {
        FieldPath::root().join(key)
    }

    #[test]
    fn test_missing_field_not_deduplicated() {
        let mut list = Diagnostics::new();
        list.report(Diagnostic::missing_field(Side::Json1, &path("a")));
        list.report(Diagnostic::missing_field(Side::Json1, &path("a")));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_mismatch_deduplicated_across_sides() {
        let mut list = Diagnostics::new();
        list.report(Diagnostic::type_mismatch(
            Side::Json1,
            &path("field1"),
            NodeKind::String,
            NodeKind::Number,
        ));
        list.report(Diagnostic::type_mismatch(
            Side::Json2,
            &path("field1"),
            NodeKind::Number,
            NodeKind::String,
        ));
        list.report(Diagnostic::value_mismatch(
            Side::Json1,
            &path("field2"),
            &Node::Number(1.into()),
            &Node::Number(2.into()),
        ));
        list.report(Diagnostic::value_mismatch(
            Side::Json2,
            &path("field2"),
            &Node::Number(2.into()),
            &Node::Number(1.into()),
        ));
        let sides: Vec<Side> = list.iter().map(Diagnostic::side).collect();
        assert_eq!(sides, vec![Side::Json1, Side::Json1]);
    }

    #[test]
    fn test_missing_array_item_keyed_by_side() {
        let mut list = Diagnostics::new();
        list.report(Diagnostic::missing_array_item(Side::Json1, &path("array"), 0));
        list.report(Diagnostic::missing_array_item(Side::Json2, &path("array"), 0));
        list.report(Diagnostic::missing_array_item(Side::Json1, &path("array"), 0));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_limit_saturates() {
        let mut list = Diagnostics::with_limit(NonZeroUsize::new(2));
        assert!(!list.is_saturated());
        for key in ["a", "b", "c"] {
            list.report(Diagnostic::missing_field(Side::Json1, &path(key)));
        }
        assert!(list.is_saturated());
        let paths: Vec<&str> = list.iter().map(|d| d.path().as_str()).collect();
        assert_eq!(paths, vec!["a", "b"]);
    }

    #[test]
    fn test_vec_keeps_duplicates() {
        let mut raw: Vec<Diagnostic> = Vec::new();
        let d = Diagnostic::missing_array_item(Side::Json1, &path("x"), 1);
        raw.report(d.clone());
        raw.report(d);
        assert_eq!(raw.len(), 2);
        assert!(!raw.is_saturated());
    }
}
